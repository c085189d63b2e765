//! Route parsing is total and canonical paths round-trip.

use proptest::prelude::*;

use nexastack::Route;

fn route() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Landing),
        Just(Route::Login),
        Just(Route::Signup),
        Just(Route::Dashboard),
        Just(Route::Projects),
        Just(Route::Members),
        Just(Route::Settings),
        "[A-Za-z0-9-]{1,12}".prop_map(|project_id| Route::ProjectDetails { project_id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `Route::parse(route.path())` gives the route back.
    #[test]
    fn property_path_round_trips(route in route()) {
        prop_assert_eq!(Route::parse(&route.path()), route);
    }

    /// PROPERTY: a trailing slash never changes the route.
    #[test]
    fn property_trailing_slash_is_ignored(route in route()) {
        let path = route.path();
        let slashed = if path == "/" { path.clone() } else { format!("{}/", path) };
        prop_assert_eq!(Route::parse(&slashed), route);
    }

    /// PROPERTY: parsing never panics, and unknown paths keep the input.
    #[test]
    fn property_parse_is_total(path in "/[a-z/]{0,24}") {
        if let Route::NotFound { path: kept } = Route::parse(&path) {
            prop_assert_eq!(kept, path);
        }
    }
}
