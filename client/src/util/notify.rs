//! Form notices shown with the browser's blocking alert.

use folio::form::{Notice, Notifier};

/// [`Notifier`] backed by `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, notice: &Notice) {
        #[cfg(feature = "csr")]
        {
            let shown = web_sys::window().map(|w| w.alert_with_message(&notice.message()));
            if !matches!(shown, Some(Ok(()))) {
                log::debug!("alert unavailable: {}", notice.message());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("{}", notice.message());
        }
    }
}
