//! Documentation page that boots the Swagger UI bundle.

use crate::config::WidgetOptions;
use crate::error::AppResult;
use serde::Serialize;

/// Serializable part of the `SwaggerUIBundle` options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BundleOptions<'a> {
    url: &'a str,
    #[serde(rename = "dom_id")]
    dom_id: &'a str,
    deep_linking: bool,
    layout: &'a str,
    validator_url: Option<&'a str>,
    supported_submit_methods: &'a [String],
    doc_expansion: &'a str,
    apis_sorter: &'a str,
    show_request_headers: bool,
}

impl<'a> From<&'a WidgetOptions> for BundleOptions<'a> {
    fn from(options: &'a WidgetOptions) -> Self {
        BundleOptions {
            url: &options.url,
            dom_id: &options.dom_id,
            deep_linking: options.deep_linking,
            layout: &options.layout,
            validator_url: None,
            supported_submit_methods: &options.supported_submit_methods,
            doc_expansion: &options.doc_expansion,
            apis_sorter: &options.apis_sorter,
            show_request_headers: options.show_request_headers,
        }
    }
}

/// JSON for the bundle options, safe to inline in a `<script>` block.
pub fn bundle_options_json(options: &WidgetOptions) -> AppResult<String> {
    let json = serde_json::to_string_pretty(&BundleOptions::from(options))?;
    Ok(json.replace("</", "<\\/"))
}

/// Renders the page hosting the widget and its navigation controls.
pub fn render_index(options: &WidgetOptions) -> AppResult<String> {
    let bundle = options.bundle_base_url.trim_end_matches('/');
    let json = bundle_options_json(options)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>grlc</title>
    <link rel="stylesheet" href="{bundle}/swagger-ui.css">
</head>
<body>
    <div id="grlc-nav">
        <a id="prev-commit" style="display: none">&lt; Prev</a>
        <div id="ohyeahdiv" style="display: none"><a id="ohyeah" onclick="grlcProvToggle()">Oh yeah?</a></div>
        <a id="next-commit" style="display: none">Next &gt;</a>
    </div>
    <div id="prov" style="display: none"></div>
    <div id="swagger-ui"></div>
    <script src="{bundle}/swagger-ui-bundle.js"></script>
    <script src="{bundle}/swagger-ui-standalone-preset.js"></script>
    <script src="static/js/grlc-layout.js"></script>
    <script src="static/js/grlc-api.js"></script>
    <script>
        window.onload = function() {{
            const options = {json};
            window.ui = SwaggerUIBundle(Object.assign(options, {{
                presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
                plugins: [SwaggerUIBundle.plugins.DownloadUrl, GrlcLayoutPlugin],
                onComplete: grlcOnComplete,
                onFailure: grlcOnFailure
            }}));
        }};
    </script>
</body>
</html>
"#,
        bundle = bundle,
        json = json
    ))
}
