/*!
    Previous/next version navigation.

    A documentation page served for a given commit carries the commit ids of
    its neighbours. This module turns them into typed link targets and keeps
    the visibility of the two navigation controls.
*/

use crate::spec::SpecObject;
use log::debug;
use std::fmt;

const COMMIT_SEGMENT: &str = "commit";

/// Two-state visibility shared by every control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Inline style projecting the state onto an element.
    pub fn css(self) -> &'static str {
        match self {
            Visibility::Hidden => "display: none",
            Visibility::Visible => "",
        }
    }
}

/// URL a navigation control sends the browser to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget(String);

impl NavTarget {
    pub fn for_commit(base: &str, commit_id: &str) -> Self {
        NavTarget(format!("{}{}/{}", base, COMMIT_SEGMENT, commit_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Performs full-page navigation.
pub trait Navigator {
    fn redirect(&mut self, target: &NavTarget);
}

/// Strips a stale commit segment from `base_path`.
///
/// Everything from the first occurrence of `commit` onwards is dropped, so
/// `/api-git/u/r/commit/abc/` becomes `/api-git/u/r/`.
pub fn derive_base_path(base_path: &str) -> &str {
    match base_path.find(COMMIT_SEGMENT) {
        Some(idx) => &base_path[..idx],
        None => base_path,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavControl {
    visibility: Visibility,
    target: Option<NavTarget>,
}

impl NavControl {
    pub fn show(&mut self, target: NavTarget) {
        self.target = Some(target);
        self.visibility = Visibility::Visible;
    }

    pub fn hide(&mut self) {
        self.target = None;
        self.visibility = Visibility::Hidden;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn target(&self) -> Option<&NavTarget> {
        self.target.as_ref()
    }

    /// Click handler. A hidden control has no binding and does nothing.
    pub fn click<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        if let Some(target) = &self.target {
            navigator.redirect(target);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitLinks {
    pub prev: NavControl,
    pub next: NavControl,
}

impl CommitLinks {
    /// Points both controls at the neighbouring commits of `spec`.
    ///
    /// A missing `basePath` disables both controls. An empty one is kept as is,
    /// which yields bare `commit/<id>` targets.
    pub fn set_from_spec(&mut self, spec: &SpecObject) {
        let base = match spec.base_path.as_deref() {
            Some(base_path) => derive_base_path(base_path),
            None => {
                debug!("Specification has no basePath, hiding commit navigation");
                self.prev.hide();
                self.next.hide();
                return;
            }
        };
        debug!("Derived navigation base path: '{}'", base);
        set_control(&mut self.prev, base, spec.prev_commit.as_deref());
        set_control(&mut self.next, base, spec.next_commit.as_deref());
    }
}

fn set_control(control: &mut NavControl, base: &str, commit_id: Option<&str>) {
    match commit_id {
        Some(id) => control.show(NavTarget::for_commit(base, id)),
        None => control.hide(),
    }
}
