//! Tests for the routing table
//!
//! Validates path recognition, the guard table, and route titles.

#[cfg(test)]
mod tests {
    use crate::routes::Route;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn recognizes_every_declared_path() {
        assert_eq!(Route::recognize("/"), Some(Route::Root));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/articlelist"), Some(Route::ArticleList));
        assert_eq!(Route::recognize("/article/add"), Some(Route::ArticleAdd));
        assert_eq!(Route::recognize("/article-list"), Some(Route::ArticleBrowse));
        assert_eq!(Route::recognize("/user/add"), Some(Route::UserAdd));
        assert_eq!(Route::recognize("/userlist"), Some(Route::UserList));
    }

    #[test]
    fn edit_routes_capture_the_id_segment() {
        assert_eq!(
            Route::recognize("/article/edit/a-17"),
            Some(Route::ArticleEdit {
                id: "a-17".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/user/edit/42"),
            Some(Route::UserEdit {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn only_the_dashboard_is_guarded() {
        let guarded: Vec<Route> = Route::iter().filter(Route::requires_auth).collect();
        assert_eq!(guarded, vec![Route::Dashboard]);
    }

    #[test]
    fn titles_match_the_navigation_labels() {
        assert_eq!(Route::Dashboard.title(), "Dashboard");
        assert_eq!(Route::Login.title(), "Login");
        assert_eq!(Route::ArticleList.title(), "Article List");
        assert_eq!(Route::ArticleAdd.title(), "Add Article");
        assert_eq!(Route::ArticleBrowse.title(), "Articles");
        assert_eq!(
            Route::ArticleEdit {
                id: "a".to_string()
            }
            .title(),
            "Edit Article"
        );
        assert_eq!(Route::UserAdd.title(), "Add User");
        assert_eq!(Route::UserList.title(), "User List");
        assert_eq!(
            Route::UserEdit {
                id: "u".to_string()
            }
            .title(),
            "Edit User"
        );
    }

    #[test]
    fn nav_routes_exclude_login_and_parameterized_views() {
        let nav = Route::nav_routes();
        assert_eq!(
            nav,
            vec![
                Route::Dashboard,
                Route::ArticleList,
                Route::ArticleBrowse,
                Route::UserList
            ]
        );
    }

    #[test]
    fn paths_render_back_to_the_table() {
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(
            Route::UserEdit {
                id: "42".to_string()
            }
            .to_path(),
            "/user/edit/42"
        );
        assert_eq!(
            Route::ArticleEdit {
                id: "a-17".to_string()
            }
            .to_path(),
            "/article/edit/a-17"
        );
    }
}
