//! Headless page model: the rendering operations write into this handle
//! instead of looking elements up in a live document.

use html_escape::encode_text;

use crate::format::{format_content, format_date};
use crate::types::{Post, PostSummary};

pub const EMPTY_FEED_MESSAGE: &str = "Статьи скоро появятся!";
pub const EXCERPT_PLACEHOLDER: &str = "Краткое описание недоступно";

const STYLESHEET: &str = "\
.blog-post-card{border:1px solid #ddd;border-radius:6px;padding:16px;margin-bottom:16px}\
.post-meta{color:#666;font-size:.9em;display:flex;gap:12px}\
.post-excerpt{margin:12px 0}\
.read-more-btn{font-weight:600}\
.no-posts{color:#666;text-align:center;padding:24px}\
#blog-loader{color:#666;padding:12px}\
#blog-error{color:#b00020;padding:12px}\
.post-modal{position:fixed;inset:0;background:rgba(0,0,0,.5)}\
.modal-content{background:#fff;max-width:720px;margin:48px auto;padding:24px;border-radius:6px}\
.modal-header{display:flex;justify-content:space-between}";

/// One toggleable block of the page: a visibility flag plus inner markup.
pub struct Element {
    visible: bool,
    html: String,
}

impl Element {
    fn new(html: &str) -> Element {
        Element {
            visible: false,
            html: html.to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    fn display_style(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }
}

/// The blog page: posts container, loading indicator, error banner and at
/// most one modal overlay. Opening a modal replaces any existing one.
pub struct BlogPage {
    posts_html: String,
    loader: Element,
    error: Element,
    modal: Option<String>,
    alerts: Vec<String>,
}

impl BlogPage {
    pub fn new() -> BlogPage {
        BlogPage {
            posts_html: String::new(),
            loader: Element::new("Загрузка..."),
            error: Element::new(""),
            modal: None,
            alerts: Vec::new(),
        }
    }

    pub fn show_loading(&mut self, show: bool) {
        self.loader.visible = show;
    }

    /// Toggle the error banner. The banner text is only overwritten when a
    /// non-empty message is passed; hiding keeps the last message in place.
    pub fn show_error(&mut self, show: bool, message: &str) {
        self.error.visible = show;
        if !message.is_empty() {
            self.error.html = encode_text(message).to_string();
        }
    }

    /// Replace the container content with one card per post, or the
    /// empty-feed message when there are none.
    pub fn display_posts(&mut self, posts: &[PostSummary]) {
        if posts.is_empty() {
            self.posts_html = format!("<div class=\"no-posts\"><p>{EMPTY_FEED_MESSAGE}</p></div>");
            return;
        }

        self.posts_html = posts.iter().map(render_card).collect();
    }

    pub fn open_modal(&mut self, post: &Post) {
        self.modal = Some(render_modal(post));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Record a user-facing alert; the headless stand-in for a dialog.
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    pub fn posts_html(&self) -> &str {
        &self.posts_html
    }

    pub fn loader(&self) -> &Element {
        &self.loader
    }

    pub fn error(&self) -> &Element {
        &self.error
    }

    pub fn modal_html(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"ru\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>Блог</title>\n\
             <style>{STYLESHEET}</style>\n\
             </head>\n\
             <body>\n\
             <section class=\"blog\">\n\
             <div id=\"blog-loader\" style=\"display:{}\">{}</div>\n\
             <div id=\"blog-error\" style=\"display:{}\">{}</div>\n\
             <div id=\"blog-posts\">{}</div>\n\
             </section>\n\
             {}\n\
             </body>\n\
             </html>",
            self.loader.display_style(),
            self.loader.html,
            self.error.display_style(),
            self.error.html,
            self.posts_html,
            self.modal.as_deref().unwrap_or(""),
        )
    }
}

impl Default for BlogPage {
    fn default() -> Self {
        BlogPage::new()
    }
}

fn render_card(post: &PostSummary) -> String {
    let excerpt = post.excerpt.as_deref().unwrap_or(EXCERPT_PLACEHOLDER);

    format!(
        "<article class=\"blog-post-card\">\
         <div class=\"post-header\">\
         <h3 class=\"post-title\"><a href=\"/posts/{id}\">{title}</a></h3>\
         <div class=\"post-meta\">\
         <span class=\"author\">Автор: {author}</span>\
         <span class=\"date\">{date}</span>\
         </div>\
         </div>\
         <div class=\"post-content\">\
         <p class=\"post-excerpt\">{excerpt}</p>\
         <a class=\"read-more-btn\" href=\"/posts/{id}\">Читать далее →</a>\
         </div>\
         </article>",
        id = post.id,
        title = encode_text(&post.title),
        author = encode_text(&post.author),
        date = format_date(&post.created_at),
        excerpt = encode_text(excerpt),
    )
}

fn render_modal(post: &Post) -> String {
    format!(
        "<div class=\"post-modal\">\
         <div class=\"modal-content\">\
         <div class=\"modal-header\">\
         <h2>{title}</h2>\
         <a class=\"close-btn\" href=\"/\">&times;</a>\
         </div>\
         <div class=\"modal-body\">\
         <div class=\"post-meta\">\
         <span>Автор: {author}</span>\
         <span>Дата: {date}</span>\
         </div>\
         <div class=\"post-full-content\">{content}</div>\
         </div>\
         </div>\
         </div>",
        title = encode_text(&post.title),
        author = encode_text(&post.author),
        date = format_date(&post.created_at),
        content = format_content(&encode_text(&post.content)),
    )
}
