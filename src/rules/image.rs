//! Lead image rules.
//!
//! Video pages use the video thumbnail. Otherwise the usual social card
//! tags are tried, then images inside the article body, then any image.

use crate::cascade::{Candidate, Field, FieldRuleSet, Rule};
use crate::context::ExtractionContext;
use crate::rules::Source;
use crate::{url_utils, video};

/// Thumbnail of the YouTube video the requested URL points to.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoutubeThumbnailRule;

impl Rule for YoutubeThumbnailRule {
    fn name(&self) -> &str {
        "youtube thumbnail"
    }

    fn evaluate(&self, ctx: &ExtractionContext<'_>) -> Candidate {
        let video = video::extract_youtube_id(ctx.requested_url)?;
        Some(video::thumbnail_url(&video.id, ctx.options.thumbnail_quality))
    }
}

/// An image URL picked from the document, resolved against the page URL.
#[derive(Debug, Clone, Copy)]
pub struct ImageRule(pub Source);

impl Rule for ImageRule {
    fn name(&self) -> &str {
        self.0.selector()
    }

    fn evaluate(&self, ctx: &ExtractionContext<'_>) -> Candidate {
        let raw = self.0.pick(ctx.document)?;
        let candidate = raw.trim();
        if candidate.is_empty() || !url_utils::is_url(candidate) {
            return None;
        }
        Some(url_utils::resolve(ctx.resolved_url, candidate))
    }
}

/// Build the image cascade.
#[must_use]
pub fn rule_set() -> FieldRuleSet {
    let sources = [
        Source::Meta(r#"meta[property="og:image:secure_url"]"#),
        Source::Meta(r#"meta[property="og:image:url"]"#),
        Source::Meta(r#"meta[property="og:image"]"#),
        Source::Meta(r#"meta[name="twitter:image:src"]"#),
        Source::Meta(r#"meta[name="twitter:image"]"#),
        Source::Meta(r#"meta[name="sailthru.image.thumb"]"#),
        Source::Meta(r#"meta[name="sailthru.image.full"]"#),
        Source::Meta(r#"meta[name="sailthru.image"]"#),
        Source::FirstSrc("article img[src]"),
        Source::FirstSrc("#content img[src]"),
        Source::Src(r#"img[alt*="author"]"#),
        Source::Src("img[src]"),
    ];

    let mut rules: Vec<Box<dyn Rule>> = vec![Box::new(YoutubeThumbnailRule)];
    rules.extend(sources.into_iter().map(|s| Box::new(ImageRule(s)) as Box<dyn Rule>));

    FieldRuleSet::new(Field::Image, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dom, Options};

    fn image_of(html: &str, requested: &str, resolved: &str) -> String {
        let doc = dom::parse(html);
        let options = Options::default();
        let ctx = ExtractionContext::new(&doc, requested, resolved, &options);
        rule_set().run(&ctx)
    }

    #[test]
    fn test_youtube_thumbnail_bypasses_meta() {
        let html = r#"<meta property="og:image" content="https://i.ytimg.com/other.jpg">"#;
        assert_eq!(
            image_of(
                html,
                "https://www.youtube.com/watch?v=abc123&t=5s",
                "https://www.youtube.com/watch?v=abc123&t=5s"
            ),
            "https://img.youtube.com/vi/abc123/sddefault.jpg"
        );
    }

    #[test]
    fn test_youtube_rule_uses_requested_url() {
        let doc = dom::parse("<html></html>");
        let options = Options::default();
        let ctx = ExtractionContext::new(
            &doc,
            "https://example.com/post",
            "https://youtu.be/abc123",
            &options,
        );
        assert_eq!(YoutubeThumbnailRule.evaluate(&ctx), None);
    }

    #[test]
    fn test_youtube_without_id_falls_through() {
        let html = r#"<meta property="og:image" content="https://yt.example/logo.png">"#;
        assert_eq!(
            image_of(html, "https://www.youtube.com/", "https://www.youtube.com/"),
            "https://yt.example/logo.png"
        );
    }

    #[test]
    fn test_thumbnail_quality_option() {
        let doc = dom::parse("<html></html>");
        let options = Options {
            thumbnail_quality: video::ThumbnailQuality::High,
            ..Options::default()
        };
        let url = "https://youtu.be/abc123";
        let ctx = ExtractionContext::new(&doc, url, url, &options);
        assert_eq!(
            YoutubeThumbnailRule.evaluate(&ctx).as_deref(),
            Some("https://img.youtube.com/vi/abc123/hqdefault.jpg")
        );
    }

    #[test]
    fn test_secure_url_beats_plain_og_image() {
        let html = r#"
            <meta property="og:image" content="http://example.com/plain.jpg">
            <meta property="og:image:secure_url" content="https://example.com/secure.jpg">
        "#;
        assert_eq!(
            image_of(html, "https://example.com/p", "https://example.com/p"),
            "https://example.com/secure.jpg"
        );
    }

    #[test]
    fn test_og_image_url_beats_og_image() {
        let html = r#"
            <meta property="og:image" content="https://example.com/plain.jpg">
            <meta property="og:image:url" content="https://example.com/u.jpg">
        "#;
        assert_eq!(
            image_of(html, "https://example.com/p", "https://example.com/p"),
            "https://example.com/u.jpg"
        );
    }

    #[test]
    fn test_twitter_image_beats_sailthru() {
        let html = r#"
            <meta name="sailthru.image.thumb" content="/thumb.jpg">
            <meta name="twitter:image" content="/card.jpg">
        "#;
        assert_eq!(
            image_of(html, "https://example.com/p", "https://example.com/p"),
            "https://example.com/card.jpg"
        );
    }

    #[test]
    fn test_sailthru_thumb_beats_full() {
        let html = r#"
            <meta name="sailthru.image.full" content="/full.jpg">
            <meta name="sailthru.image.thumb" content="/thumb.jpg">
        "#;
        assert_eq!(
            image_of(html, "https://example.com/p", "https://example.com/p"),
            "https://example.com/thumb.jpg"
        );
    }

    #[test]
    fn test_relative_candidate_is_resolved() {
        let html = r#"<meta property="og:image" content="/img/pic.jpg">"#;
        assert_eq!(
            image_of(html, "https://example.com/post", "https://example.com/post"),
            "https://example.com/img/pic.jpg"
        );
    }

    #[test]
    fn test_resolves_against_resolved_url() {
        let html = r#"<meta name="twitter:image" content="pic.jpg">"#;
        assert_eq!(
            image_of(html, "https://short.link/x", "https://example.com/blog/post"),
            "https://example.com/blog/pic.jpg"
        );
    }

    #[test]
    fn test_malformed_absolute_candidate_is_skipped() {
        let html = r#"
            <meta property="og:image" content="http://">
            <meta name="twitter:image" content="https://example.com/ok.jpg">
        "#;
        assert_eq!(
            image_of(html, "https://example.com/", "https://example.com/"),
            "https://example.com/ok.jpg"
        );
    }

    #[test]
    fn test_blank_meta_falls_through() {
        let html = r#"
            <meta property="og:image" content="  ">
            <body><img src="/first.png"></body>
        "#;
        assert_eq!(
            image_of(html, "https://example.com/", "https://example.com/"),
            "https://example.com/first.png"
        );
    }

    #[test]
    fn test_article_image_beats_page_image() {
        let html = r#"
            <body>
              <img src="/logo.png">
              <article><p>Text</p><img src="/hero.jpg"></article>
            </body>
        "#;
        assert_eq!(
            image_of(html, "https://example.com/", "https://example.com/"),
            "https://example.com/hero.jpg"
        );
    }

    #[test]
    fn test_content_container_image() {
        let html = r#"
            <body>
              <img src="/logo.png">
              <div id="content"><img src="/inline.jpg"></div>
            </body>
        "#;
        assert_eq!(
            image_of(html, "https://example.com/", "https://example.com/"),
            "https://example.com/inline.jpg"
        );
    }

    #[test]
    fn test_author_image_beats_first_image() {
        let html = r#"
            <body>
              <img src="/logo.png">
              <img alt="author portrait" src="/jane.jpg">
            </body>
        "#;
        assert_eq!(
            image_of(html, "https://example.com/", "https://example.com/"),
            "https://example.com/jane.jpg"
        );
    }

    #[test]
    fn test_no_image() {
        let html = "<html><body><p>No pictures</p></body></html>";
        assert_eq!(image_of(html, "https://example.com/", "https://example.com/"), "");
    }
}
