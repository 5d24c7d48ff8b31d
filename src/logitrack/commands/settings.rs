use crate::commands::{load_page, CmdResult, ListRequest, Listing};
use crate::error::Result;
use crate::metrics::AccountSettings;
use crate::model::UserRecord;
use crate::route::Route;
use crate::store::{fetch, DataSource};

/// Account profile, notification preferences and the team table.
pub async fn run<S>(source: &S, team: &ListRequest<UserRecord>) -> Result<CmdResult>
where
    S: DataSource<AccountSettings> + DataSource<Vec<UserRecord>> + ?Sized,
{
    let (account, (page, tiles)) =
        tokio::try_join!(fetch::<AccountSettings, S>(source), load_page(source, team))?;

    let mut result = CmdResult::for_route(Route::Settings)
        .with_tiles(tiles)
        .with_listing(Listing::Users(page));
    result.account = Some(account);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TileValue;
    use crate::model::UserStatus;
    use crate::query::StatusFilter;
    use crate::store::fixture::FixtureSource;
    use std::num::NonZeroUsize;

    fn team() -> ListRequest<UserRecord> {
        ListRequest::new(NonZeroUsize::new(10).unwrap())
    }

    #[tokio::test]
    async fn loads_account_and_team() {
        let result = run(&FixtureSource::instant(), &team()).await.unwrap();
        let account = result.account.unwrap();
        assert_eq!(account.profile.position, "Logistics Manager");
        assert_eq!(result.tiles[1].value, TileValue::Count(3));
        assert_eq!(result.listing.unwrap().total(), 4);
    }

    #[tokio::test]
    async fn filters_team_by_status() {
        let req = team().status(StatusFilter::Only(UserStatus::Inactive));
        let result = run(&FixtureSource::instant(), &req).await.unwrap();
        match result.listing {
            Some(Listing::Users(page)) => {
                assert_eq!(page.items.len(), 1);
                assert_eq!(page.items[0].email, "emma@company.com");
            }
            other => panic!("expected users listing, got {:?}", other),
        }
    }
}
