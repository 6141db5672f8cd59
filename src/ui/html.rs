//! HTML document shell and escaping.

/// Escape text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the application document.
///
/// `content` is inserted verbatim and must already be escaped.
pub fn html_shell(title: &str, content: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased">
    <div id="app-shell" class="flex flex-col h-screen overflow-hidden">
        <header class="sticky top-0 z-50 w-full bg-surfaceContainer shrink-0">
            <div class="container mx-auto flex h-14 items-center px-4 max-w-5xl">
                <span class="font-semibold text-lg">{title}</span>
            </div>
        </header>

        <main id="app" class="flex-1 overflow-y-auto container mx-auto px-4 py-4 max-w-5xl">
{content}
        </main>
    </div>
</body>
</html>"#
    )
}
