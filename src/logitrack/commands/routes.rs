use crate::commands::CmdResult;
use crate::route::Route;

pub fn run() -> CmdResult {
    CmdResult {
        routes: Route::ALL.to_vec(),
        ..CmdResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_route_in_nav_order() {
        let result = run();
        assert_eq!(result.routes.first(), Some(&Route::Dashboard));
        assert_eq!(result.routes.len(), 5);
    }
}
