//! Provenance panel built from the specification's `prov` field.

use crate::navigation::Visibility;

const COPY_BUTTON: &str = r##"<button class="btn" data-clipboard-target="#provdump">Copy</button><br><br>"##;

/// Escapes the first `<` and the first `>` of a line.
///
/// Later occurrences on the same line are left as they are. Pages have always
/// rendered provenance this way and the output is kept stable.
pub fn escape_first_angle_brackets(line: &str) -> String {
    line.replacen('<', "&lt;", 1).replacen('>', "&gt;", 1)
}

const URL_SCHEMES: [&str; 2] = ["https://", "http://"];

fn find_url_start(text: &str) -> Option<(usize, usize)> {
    URL_SCHEMES
        .iter()
        .filter_map(|scheme| text.find(scheme).map(|idx| (idx, scheme.len())))
        .min()
}

/// Length of the URL at the start of `text`, without trailing punctuation.
fn url_len(text: &str) -> usize {
    let end = text
        .char_indices()
        .find(|&(i, c)| {
            c.is_whitespace()
                || matches!(c, '<' | '>' | '"' | '\'')
                || text[i..].starts_with("&lt;")
                || text[i..].starts_with("&gt;")
        })
        .map_or(text.len(), |(i, _)| i);
    text[..end]
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')'))
        .len()
}

/// Turns `http(s)://` runs of already escaped text into links opening a new tab.
pub fn linkify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((start, scheme_len)) = find_url_start(rest) {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let len = url_len(candidate);
        if len <= scheme_len {
            out.push_str(&candidate[..scheme_len]);
            rest = &candidate[scheme_len..];
            continue;
        }
        let url = &candidate[..len];
        out.push_str(&format!(r#"<a href="{}" target="_blank">{}</a>"#, url, url));
        rest = &candidate[len..];
    }
    out.push_str(rest);
    out
}

/// Renders one wrapped block per provenance line.
pub fn render_lines(prov: &str) -> String {
    prov.split('\n')
        .map(|line| {
            format!(
                r#"<div class="swagger-ui-wrap">{}</div>"#,
                linkify(&escape_first_angle_brackets(line))
            )
        })
        .collect()
}

/// Full panel body: the copy button followed by the `provdump` container.
pub fn render_provenance(prov: &str) -> String {
    format!(r#"{}<div id="provdump">{}</div>"#, COPY_BUTTON, render_lines(prov))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvenancePanel {
    state: Visibility,
    content: String,
}

impl ProvenancePanel {
    /// Replaces the panel content. A freshly rendered panel is hidden.
    pub fn render(&mut self, prov: &str) {
        self.content = render_provenance(prov);
        self.state = Visibility::Hidden;
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The `#prov` element as it should appear on the page.
    pub fn to_html(&self) -> String {
        format!(r#"<div id="prov" style="{}">{}</div>"#, self.state.css(), self.content)
    }
}
