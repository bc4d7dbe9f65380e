/*!
    Callbacks invoked by the documentation widget.

    The widget is passed explicitly to `on_complete`, so a page can be driven
    by any `DocWidget` implementation, including the fakes used in tests.
*/

use crate::config::OAuthConfig;
use crate::error::AppResult;
use crate::navigation::{CommitLinks, Visibility};
use crate::provenance::ProvenancePanel;
use crate::spec::SpecObject;
use log::{debug, error, info};
use serde_json::Value;

/// What the page needs from a loaded documentation widget.
pub trait DocWidget {
    /// The widget's object form; the loaded definition lives under `spec`.
    fn state(&self) -> Value;

    fn supports_oauth(&self) -> bool {
        false
    }

    fn init_oauth(&mut self, _oauth: &OAuthConfig) {}
}

/// View model of the documentation page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub commits: CommitLinks,
    /// The control that opens the provenance panel.
    pub provenance_toggle: Visibility,
    pub provenance: ProvenancePanel,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_provenance(&mut self) {
        self.provenance.toggle();
    }

    /// Applies a freshly loaded specification to the page.
    pub fn apply(&mut self, spec: &SpecObject) {
        match spec.prov.as_deref() {
            Some(prov) => {
                self.provenance.render(prov);
                self.provenance_toggle = Visibility::Visible;
            }
            None => {
                debug!("Specification carries no provenance");
                self.provenance = ProvenancePanel::default();
                self.provenance_toggle = Visibility::Hidden;
            }
        }
        self.commits.set_from_spec(spec);
    }
}

fn complete<W: DocWidget + ?Sized>(widget: &mut W, page: &mut PageView, oauth: &OAuthConfig) -> AppResult<()> {
    if widget.supports_oauth() {
        debug!("Initialising widget OAuth for app '{}'", oauth.app_name);
        widget.init_oauth(oauth);
    }
    let spec = SpecObject::from_widget_state(&widget.state())?;
    page.apply(&spec);
    info!(
        "Documentation page ready (prev: {}, next: {}, provenance: {})",
        page.commits.prev.visibility().is_visible(),
        page.commits.next.visibility().is_visible(),
        page.provenance_toggle.is_visible()
    );
    Ok(())
}

/// Load-completion callback. Errors are logged and leave `page` untouched.
pub fn on_complete<W: DocWidget + ?Sized>(widget: &mut W, page: &mut PageView, oauth: &OAuthConfig) {
    if let Err(e) = complete(widget, page, oauth) {
        error!("Failed to read specification from widget: {}", e);
    }
}

/// Load-failure callback.
pub fn on_failure(reason: &str) {
    error!("Unable to Load SwaggerUI: {}", reason);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FakeWidget {
        state: Value,
        oauth: bool,
        oauth_app: Option<String>,
    }

    impl DocWidget for FakeWidget {
        fn state(&self) -> Value {
            self.state.clone()
        }

        fn supports_oauth(&self) -> bool {
            self.oauth
        }

        fn init_oauth(&mut self, oauth: &OAuthConfig) {
            self.oauth_app = Some(oauth.app_name.clone());
        }
    }

    fn widget(state: Value, oauth: bool) -> FakeWidget {
        FakeWidget { state, oauth, oauth_app: None }
    }

    #[test]
    fn test_complete_sets_links_and_provenance() {
        let mut w = widget(
            json!({ "spec": r#"{"basePath": "/api-git/u/r/commit/1/", "prev_commit": "0", "prov": "line"}"# }),
            true,
        );
        let mut page = PageView::new();
        on_complete(&mut w, &mut page, &OAuthConfig::default());

        assert_eq!(w.oauth_app.as_deref(), Some("your-app-name"));
        assert_eq!(page.commits.prev.target().map(|t| t.as_str()), Some("/api-git/u/r/commit/0"));
        assert_eq!(page.commits.next.visibility(), Visibility::Hidden);
        assert_eq!(page.provenance_toggle, Visibility::Visible);
        assert_eq!(page.provenance.state(), Visibility::Hidden);
    }

    #[test]
    fn test_oauth_skipped_when_unsupported() {
        let mut w = widget(json!({ "spec": "{}" }), false);
        on_complete(&mut w, &mut PageView::new(), &OAuthConfig::default());
        assert_eq!(w.oauth_app, None);
    }

    #[test]
    fn test_bad_widget_state_leaves_page_untouched() {
        let mut page = PageView::new();
        let mut good = widget(json!({ "spec": r#"{"basePath": "/a/", "next_commit": "n", "prov": "p"}"# }), false);
        on_complete(&mut good, &mut page, &OAuthConfig::default());
        let before = page.clone();

        let mut bad = widget(json!({ "spec": 42 }), false);
        on_complete(&mut bad, &mut page, &OAuthConfig::default());
        assert_eq!(page, before);
    }

    #[test]
    fn test_missing_prov_hides_toggle() {
        let mut page = PageView::new();
        page.apply(&SpecObject { prov: Some("p".into()), ..SpecObject::default() });
        page.apply(&SpecObject::default());
        assert_eq!(page.provenance_toggle, Visibility::Hidden);
        assert_eq!(page.provenance.content(), "");
    }
}
