use pagenav_engine::NavigationError;
use tracing::warn;

/// Capabilities the embedding host exposes to the widget.
///
/// Both calls are fire-and-forget: the widget never observes whether the
/// navigation succeeded or where the report ended up.
pub trait Host {
    /// Opens `url` through the host's external-navigation capability.
    fn launch_url(&mut self, url: &str);

    /// Delivers an error to the host's logging channel.
    fn report(&mut self, error: &NavigationError) {
        warn!(kind = error.kind(), error = %error, "Navigation widget error");
    }
}

impl<H: Host + ?Sized> Host for Box<H> {
    fn launch_url(&mut self, url: &str) {
        (**self).launch_url(url);
    }

    fn report(&mut self, error: &NavigationError) {
        (**self).report(error);
    }
}
