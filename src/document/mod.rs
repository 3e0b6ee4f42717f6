use scraper::{ElementRef, Html, Selector};

/// Sports-reference hides secondary tables inside HTML comments
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Build a selector from a fixed CSS string
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Valid selector")
}

/// Concatenated text of an element and its descendants
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Text of the first match of `css` under `scope`
pub fn select_text(scope: ElementRef, css: &str) -> Option<String> {
    scope.select(&selector(css)).next().map(element_text)
}

/// `href` of the first match of `css` under `scope`
pub fn select_href(scope: ElementRef, css: &str) -> Option<String> {
    let element = scope.select(&selector(css)).next()?;
    element.value().attr("href").map(str::to_string)
}

/// Find an element anywhere in the document by its id
pub fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document.select(&selector(&format!("#{}", id))).next()
}

/// All elements matching `css`, in document order
pub fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    document.select(&selector(css)).collect()
}

/// Remove comment delimiters so commented-out markup becomes real markup
pub fn strip_comment_markers(html: &str) -> String {
    html.replace(COMMENT_OPEN, "").replace(COMMENT_CLOSE, "")
}

/// Re-parse a document with its commented-out tables made selectable
pub fn uncomment(document: &Html) -> Html {
    Html::parse_document(&strip_comment_markers(&document.root_element().html()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_table_becomes_selectable() {
        let html = Html::parse_document(
            r#"
            <html>
                <body>
                    <div id="all_advanced">
                    <!--
                        <table id="advanced"><tbody><tr><td>x</td></tr></tbody></table>
                    -->
                    </div>
                </body>
            </html>
            "#,
        );

        assert!(find_by_id(&html, "advanced").is_none());

        let cleaned = uncomment(&html);
        assert!(find_by_id(&cleaned, "advanced").is_some());
    }

    #[test]
    fn test_select_text_and_href() {
        let html = Html::parse_document(
            r#"<table><tr><td data-stat="team_name_abbr"><a href="/teams/LAL/2020.html">LAL</a></td></tr></table>"#,
        );
        let row = select_all(&html, "tr")[0];

        assert_eq!(
            select_text(row, r#"td[data-stat="team_name_abbr"] a"#).as_deref(),
            Some("LAL")
        );
        assert_eq!(
            select_href(row, r#"td[data-stat="team_name_abbr"] a"#).as_deref(),
            Some("/teams/LAL/2020.html")
        );
        assert!(select_text(row, r#"td[data-stat="awards"]"#).is_none());
    }

    #[test]
    fn test_strip_comment_markers() {
        assert_eq!(strip_comment_markers("a<!--b-->c"), "abc");
    }
}
