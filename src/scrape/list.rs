//! Reading-list page adapter.
//!
//! The page layout is `div#main_content` containing `div#list_table`, one
//! immediate child `div` per tracked series, each holding a fixed column
//! layout (checkbox, series anchor, status, rating, average). Only the
//! series anchor is extracted. Any deviation is an error; there is no
//! semantic fallback.

use scraper::{ElementRef, Html, Selector};

use crate::app::error::{HeraldError, Result};
use crate::domain::ListEntry;

pub fn parse_list(html: &str) -> Result<Vec<ListEntry>> {
    let document = Html::parse_document(html);

    let main_content = Selector::parse("div#main_content").expect("valid selector");
    let list_table = Selector::parse("div#list_table").expect("valid selector");
    let anchor = Selector::parse("a").expect("valid selector");

    let main = document
        .select(&main_content)
        .next()
        .ok_or_else(|| HeraldError::ListParse("div#main_content not found".into()))?;
    let table = main
        .select(&list_table)
        .next()
        .ok_or_else(|| HeraldError::ListParse("div#list_table not found".into()))?;

    let mut entries = Vec::new();
    for (idx, row) in child_divs(table).enumerate() {
        let col = child_divs(row)
            .nth(1)
            .ok_or_else(|| HeraldError::ListParse(format!("row {idx} has no series column")))?;
        let link = col
            .select(&anchor)
            .next()
            .ok_or_else(|| HeraldError::ListParse(format!("row {idx} has no series anchor")))?;
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| HeraldError::ListParse(format!("row {idx} anchor has no href")))?;

        entries.push(ListEntry {
            title: link.text().collect(),
            link: href.to_string(),
        });
    }

    Ok(entries)
}

fn child_divs<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "div")
}
