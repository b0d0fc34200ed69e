//! Page shell - the document frame every page renders through
//!
//! Templates are embedded in the binary. The shell composes, once per
//! request: the effective background color resolved from the matched route
//! chain (with the configured fallback), the navigation partial, the active
//! page's output, and the current-user value.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{listing_entries, ContentItem, ListingEntry, ListingSet};
use crate::helpers::format_display_date;
use crate::routes::{resolve_html_background_color, MatchedRoute};
use crate::server::session::CurrentUser;

/// Site identity fields exposed to every template
#[derive(Serialize)]
struct SiteMeta<'a> {
    title: &'a str,
    description: &'a str,
    author: &'a str,
    language: &'a str,
    url: &'a str,
}

/// Fields for one post page
#[derive(Serialize)]
struct PostView<'a> {
    title: &'a str,
    description: &'a str,
    date: Option<String>,
    html: &'a str,
    canonical: &'a str,
}

/// Renderer over the embedded templates
pub struct PageShell {
    tera: Tera,
    config: SiteConfig,
}

impl PageShell {
    /// Create a new shell with all templates loaded
    pub fn new(config: SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Page bodies are already rendered HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("templates/layout.html")),
            ("home.html", include_str!("templates/home.html")),
            ("blog_index.html", include_str!("templates/blog_index.html")),
            ("post.html", include_str!("templates/post.html")),
            ("not_found.html", include_str!("templates/not_found.html")),
            ("partials/nav.html", include_str!("templates/partials/nav.html")),
        ])?;

        Ok(Self { tera, config })
    }

    /// Render the home page
    pub fn render_home(&self, matches: &[MatchedRoute], user: &CurrentUser) -> Result<String> {
        let mut ctx = self.base_context(user);
        let inner = self.tera.render("home.html", &ctx)?;
        self.render_frame(&mut ctx, &self.config.title, inner, matches)
    }

    /// Render the blog index with its curated listings
    pub fn render_blog_index(
        &self,
        listings: &ListingSet,
        matches: &[MatchedRoute],
        user: &CurrentUser,
    ) -> Result<String> {
        let recent: Vec<ListingEntry> = listing_entries(&listings.recent);
        let highlighted: Vec<ListingEntry> = listing_entries(&listings.highlighted);

        let mut ctx = self.base_context(user);
        ctx.insert("recent", &recent);
        ctx.insert("highlighted", &highlighted);
        let inner = self.tera.render("blog_index.html", &ctx)?;
        self.render_frame(&mut ctx, &self.config.title, inner, matches)
    }

    /// Render one post page
    pub fn render_post(
        &self,
        item: &ContentItem,
        canonical: &str,
        matches: &[MatchedRoute],
        user: &CurrentUser,
    ) -> Result<String> {
        let view = PostView {
            title: item.title(),
            description: item.description(),
            date: item.date.as_ref().map(format_display_date),
            html: &item.html,
            canonical,
        };

        let mut ctx = self.base_context(user);
        ctx.insert("post", &view);
        let inner = self.tera.render("post.html", &ctx)?;
        self.render_frame(&mut ctx, item.title(), inner, matches)
    }

    /// Render the not-found page
    pub fn render_not_found(
        &self,
        path: &str,
        matches: &[MatchedRoute],
        user: &CurrentUser,
    ) -> Result<String> {
        let mut ctx = self.base_context(user);
        ctx.insert("path", path);
        let inner = self.tera.render("not_found.html", &ctx)?;
        self.render_frame(&mut ctx, "Not found", inner, matches)
    }

    fn base_context(&self, user: &CurrentUser) -> Context {
        let mut ctx = Context::new();
        ctx.insert(
            "site",
            &SiteMeta {
                title: &self.config.title,
                description: &self.config.description,
                author: &self.config.author,
                language: &self.config.language,
                url: &self.config.url,
            },
        );
        ctx.insert("user", user);
        ctx
    }

    /// Wrap rendered page output in the document frame. The effective
    /// background is the innermost declaration in the matched chain, or the
    /// configured default when no route declares one.
    fn render_frame(
        &self,
        ctx: &mut Context,
        title: &str,
        content: String,
        matches: &[MatchedRoute],
    ) -> Result<String> {
        let background =
            resolve_html_background_color(matches).unwrap_or(&self.config.default_background);

        ctx.insert("title", title);
        ctx.insert("background", background);
        ctx.insert("content", &content);
        Ok(self.tera.render("layout.html", ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{site_routes, RouteHandle};

    fn shell() -> PageShell {
        PageShell::new(SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_home_uses_default_background() {
        let routes = site_routes();
        let chain = routes.match_chain("/").unwrap();
        let html = shell()
            .render_home(&chain, &CurrentUser::anonymous())
            .unwrap();
        // No route on the home chain declares a background, so the
        // configured fallback renders
        assert!(html.contains("background-color: #f9fafb"));
        assert!(html.contains("<nav"));
    }

    #[test]
    fn test_post_background_override_wins() {
        let routes = site_routes();
        let mut chain = routes.match_chain("/blog/dark-post").unwrap();
        chain.last_mut().unwrap().handle = Some(RouteHandle::background("#0f172a"));

        let item = ContentItem {
            identifier: "dark-post".to_string(),
            filename: "dark-post.md".to_string(),
            html: "<p>body</p>".to_string(),
            attributes: Default::default(),
            date: None,
        };

        let html = shell()
            .render_post(&item, "http://example.com/blog/dark-post", &chain, &CurrentUser::anonymous())
            .unwrap();
        assert!(html.contains("background-color: #0f172a"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_blog_index_renders_listing_cards() {
        let routes = site_routes();
        let chain = routes.match_chain("/blog").unwrap();

        let item = ContentItem {
            identifier: "my-post".to_string(),
            filename: "my-post.mdx".to_string(),
            html: String::new(),
            attributes: [
                ("title".to_string(), "My Post".to_string()),
                ("description".to_string(), "All about it".to_string()),
            ]
            .into_iter()
            .collect(),
            date: None,
        };
        let listings = ListingSet {
            recent: vec![item.clone()],
            highlighted: vec![item],
        };

        let html = shell()
            .render_blog_index(&listings, &chain, &CurrentUser::anonymous())
            .unwrap();
        assert!(html.contains(r#"href="/my-post""#));
        assert!(html.contains("My Post"));
        assert!(html.contains("All about it"));
        assert!(html.contains("recent posts"));
        assert!(html.contains("stand the test of time"));
    }

    #[test]
    fn test_signed_in_user_shows_in_nav() {
        let routes = site_routes();
        let chain = routes.match_chain("/").unwrap();
        let user = CurrentUser {
            name: Some("scott".to_string()),
        };
        let html = shell().render_home(&chain, &user).unwrap();
        assert!(html.contains("scott"));
    }
}
