use crate::api::BlogApi;
use crate::view::BlogPage;

pub const LOAD_FAILED_MESSAGE: &str = "Не удалось загрузить статьи";
pub const CONNECTION_FAILED_MESSAGE: &str = "Ошибка подключения к серверу";
pub const POST_NOT_FOUND_MESSAGE: &str = "Статья не найдена";

/// Drives the API client and a page handle: load the list, open and close
/// the modal, refresh.
pub struct Blog {
    api: BlogApi,
    pub page: BlogPage,
}

impl Blog {
    pub fn new(api: BlogApi) -> Blog {
        Blog {
            api,
            page: BlogPage::new(),
        }
    }

    /// Load the post list into the page. On failure the container content is
    /// left as it was and the error banner is shown instead; the loading
    /// indicator is hidden again on every path.
    pub async fn load_posts(&mut self) {
        self.page.show_loading(true);

        match self.api.fetch_posts().await {
            Ok(posts) => {
                self.page.display_posts(&posts);
                self.page.show_error(false, "");
            }
            Err(e) => {
                tracing::error!("failed to load posts: {e}");
                let message = if e.is_rejection() {
                    LOAD_FAILED_MESSAGE
                } else {
                    CONNECTION_FAILED_MESSAGE
                };
                self.page.show_error(true, message);
            }
        }

        self.page.show_loading(false);
    }

    /// Fetch one post and open it in the modal slot; an absent post records
    /// the not-found alert and leaves the slot untouched.
    pub async fn open_post(&mut self, id: u64) {
        match self.api.fetch_post(id).await {
            Some(post) => self.page.open_modal(&post),
            None => self.page.alert(POST_NOT_FOUND_MESSAGE),
        }
    }

    pub fn close_post_modal(&mut self) {
        self.page.close_modal();
    }

    pub async fn refresh(&mut self) {
        self.load_posts().await;
    }
}
