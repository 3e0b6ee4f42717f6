use log::debug;
use scraper::Html;

use crate::document::{element_text, find_by_id, selector};
use crate::domain::PlayoffOutcome;

const META_BLOCK_ID: &str = "meta";

/// Classify how far a team went in the playoffs from its season page summary
pub fn parse_team_playoff_result(html: &Html) -> PlayoffOutcome {
    let Some(meta) = find_by_id(html, META_BLOCK_ID) else {
        debug!("  No #meta block found");
        return PlayoffOutcome::Other;
    };

    let playoffs_text = meta
        .select(&selector("p"))
        .map(element_text)
        .find(|text| is_playoffs_paragraph(text));

    match playoffs_text {
        Some(text) => classify_playoff_text(&text),
        None => {
            debug!("  No playoffs paragraph in #meta");
            PlayoffOutcome::Other
        }
    }
}

fn is_playoffs_paragraph(text: &str) -> bool {
    text.contains("NBA") && text.contains("Playoffs")
}

/// Map a playoffs sentence to an outcome, most specific match first
pub fn classify_playoff_text(text: &str) -> PlayoffOutcome {
    let text = text.to_lowercase();

    if text.contains("won nba finals") {
        PlayoffOutcome::Champions
    } else if text.contains("won nba western conference finals")
        || text.contains("won nba eastern conference finals")
    {
        PlayoffOutcome::ConferenceChampions
    } else if text.contains("conference finals") {
        PlayoffOutcome::ConferenceFinals
    } else {
        PlayoffOutcome::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_page(meta: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div id="meta"><div><h1>2015-16 Team Stats</h1>{meta}</div></div></body></html>"#
        ))
    }

    #[test]
    fn test_classify_without_markup() {
        assert_eq!(
            classify_playoff_text("NBA 2016 Playoffs: Won NBA Finals (4-3) versus GSW"),
            PlayoffOutcome::Champions
        );
        assert_eq!(
            classify_playoff_text("Won NBA Western Conference Finals (4-1) versus SAS"),
            PlayoffOutcome::ConferenceChampions
        );
        assert_eq!(
            classify_playoff_text("Lost NBA Eastern Conference Finals (2-4) versus CLE"),
            PlayoffOutcome::ConferenceFinals
        );
        assert_eq!(
            classify_playoff_text("lost in NBA Eastern Conference Finals"),
            PlayoffOutcome::ConferenceFinals
        );
        assert_eq!(
            classify_playoff_text("Lost NBA Eastern Conference First Round (1-4)"),
            PlayoffOutcome::Other
        );
    }

    #[test]
    fn test_only_literal_finals_phrase_counts_as_title() {
        // "won the NBA Finals" is prose, not the page's "Won NBA Finals" line
        assert_eq!(
            classify_playoff_text("The Boston Celtics won the NBA Finals"),
            PlayoffOutcome::Other
        );
        assert_eq!(
            classify_playoff_text("The Boston Celtics Won NBA Finals (4-2) versus DAL"),
            PlayoffOutcome::Champions
        );
    }

    #[test]
    fn test_champions_from_meta_block() {
        let html = team_page(
            r#"
            <p><strong>Record:</strong> 57-25, Finished 1st in NBA Central Division</p>
            <p><strong><a href="/playoffs/NBA_2016.html">2016 NBA Playoffs</a>:</strong>
               Won NBA Eastern Conference First Round (4-0) versus DET<br>
               Won NBA Eastern Conference Finals (4-2) versus TOR<br>
               Won NBA Finals (4-3) versus GSW</p>
            "#,
        );

        assert_eq!(parse_team_playoff_result(&html), PlayoffOutcome::Champions);
    }

    #[test]
    fn test_conference_champions_and_finalists() {
        let champions = team_page(
            r#"<p>2016 NBA Playoffs: Won NBA Western Conference Finals (4-3) versus OKC<br>Lost NBA Finals (3-4) versus CLE</p>"#,
        );
        let finalists = team_page(
            r#"<p>2016 NBA Playoffs: Won NBA Eastern Conference Semifinals (4-3) versus MIA<br>Lost NBA Eastern Conference Finals (2-4) versus CLE</p>"#,
        );

        assert_eq!(
            parse_team_playoff_result(&champions),
            PlayoffOutcome::ConferenceChampions
        );
        assert_eq!(
            parse_team_playoff_result(&finalists),
            PlayoffOutcome::ConferenceFinals
        );
    }

    #[test]
    fn test_first_matching_paragraph_wins() {
        let html = team_page(
            r#"
            <p>2015 NBA Playoffs: Lost NBA Western Conference First Round (0-4)</p>
            <p>2016 NBA Playoffs: Won NBA Finals (4-3)</p>
            "#,
        );

        assert_eq!(parse_team_playoff_result(&html), PlayoffOutcome::Other);
    }

    #[test]
    fn test_missing_meta_or_paragraph_is_other() {
        let no_meta =
            Html::parse_document("<html><body><p>2016 NBA Playoffs: Won NBA Finals</p></body></html>");
        let no_playoffs = team_page("<p>Record: 17-65, Finished 5th in NBA Atlantic Division</p>");

        assert_eq!(parse_team_playoff_result(&no_meta), PlayoffOutcome::Other);
        assert_eq!(parse_team_playoff_result(&no_playoffs), PlayoffOutcome::Other);
        assert_eq!(PlayoffOutcome::Other.to_string(), "other");
    }
}
