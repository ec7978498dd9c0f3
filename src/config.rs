// Site configuration. Replace these with the real destinations before deploy.

/// Keeping the newsletter action on this sentinel leaves the form in demo
/// mode: submission is intercepted and a notice shown instead.
pub const NEWSLETTER_DEMO_ACTION: &str = "#";

pub struct Links {
    pub youtube_channel: &'static str,
    pub latest_video_id: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
    pub twitter: &'static str,
    pub newsletter_action: &'static str,
}

pub const LINKS: Links = Links {
    youtube_channel: "https://youtube.com/@driftlinemedia",
    latest_video_id: "jNQXAC9IVRw",
    email: "studio@driftline.media",
    instagram: "https://instagram.com/driftlinemedia",
    twitter: "https://twitter.com/driftlinemedia",
    newsletter_action: NEWSLETTER_DEMO_ACTION,
};

impl Links {
    /// Embed URL for the featured episode, or `None` when no video id is
    /// configured (whitespace counts as unconfigured).
    pub fn featured_embed_src(&self) -> Option<String> {
        let id = self.latest_video_id.trim();
        if id.is_empty() {
            None
        } else {
            Some(format!("https://www.youtube.com/embed/{}", id))
        }
    }

    pub fn videos_url(&self) -> String {
        format!("{}/videos", self.youtube_channel.trim_end_matches('/'))
    }

    /// Whether newsletter submissions should be intercepted rather than sent.
    pub fn newsletter_is_demo(&self) -> bool {
        self.newsletter_action == NEWSLETTER_DEMO_ACTION
    }
}
