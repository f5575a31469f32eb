use axum::response::Html;

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub fn layout(title: &str, notice: Option<String>, body: &str) -> Html<String> {
    let notice = match notice {
        Some(text) => include_res!(str, "/pages/notice.html").replace("{text}", &escape_html(&text)),
        None => String::new(),
    };

    Html(
        include_res!(str, "/pages/layout.html")
            .replace("{title}", &escape_html(title))
            .replace("{notice}", &notice)
            .replace("{body}", body),
    )
}

// Braces too, so values can't turn into template placeholders.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_neutralizes_markup_and_placeholders() {
        assert_eq!(
            escape_html(r#"<b onclick="x">{body} & 'co'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;&#123;body&#125; &amp; &#39;co&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn layout_shows_notice_only_when_present() {
        let Html(with) = layout("Menu", Some("Message sent successfully.".into()), "<p>hi</p>");
        assert!(with.contains("Message sent successfully."));
        assert!(with.contains("<p>hi</p>"));

        let Html(without) = layout("Menu", None, "<p>hi</p>");
        assert!(!without.contains("class=\"notice\""));
    }
}
