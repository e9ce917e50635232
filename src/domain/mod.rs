use serde::Serialize;

/// One tracked series on the user's reading list.
///
/// `link` is the stable identifier tying the list to the release feed;
/// it is compared verbatim, so both scrapers must leave it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub title: String,
    pub link: String,
}

/// One chapter-release announcement from the public feed, after the
/// title-slicing adapter has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    /// Display title, already padded for the digest.
    pub title: String,
    pub link: String,
    /// Chapter label without its `c` marker, e.g. `"12"`.
    pub chapter: String,
    /// Fan-translation group credited in the item title.
    pub scan: String,
    /// Release date as printed in the item description.
    pub date: String,
}
