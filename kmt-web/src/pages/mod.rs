mod article_browse;
mod article_form;
mod article_list;
mod dashboard;
pub mod login;
mod not_found;
mod user_form;
mod user_list;

pub use article_browse::ArticleBrowsePage;
pub use article_form::ArticleFormPage;
pub use article_list::ArticleListPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use user_form::UserFormPage;
pub use user_list::UserListPage;
