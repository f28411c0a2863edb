use crate::state::PageState;
use podcast_api::PodcastItem;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum DataView<'a> {
    /// Nothing requested yet.
    Blank,
    Loading,
    Items(&'a [PodcastItem]),
    NoData,
}

/// What the page shows for a given state. The error notice is independent
/// of the data view.
#[derive(Debug, PartialEq)]
pub struct PageView<'a> {
    pub data: DataView<'a>,
    pub error: Option<&'a str>,
    pub page: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl PageState {
    pub fn view(&self) -> PageView<'_> {
        let data = if self.is_loading() {
            DataView::Loading
        } else {
            match self.results() {
                None => DataView::Blank,
                Some([]) => DataView::NoData,
                Some(items) => DataView::Items(items),
            }
        };

        PageView {
            data,
            error: self.error(),
            page: self.query().page,
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        }
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            DataView::Blank => {}
            DataView::Loading => writeln!(f, "Loading...")?,
            DataView::NoData => writeln!(f, "No data found.")?,
            DataView::Items(items) => {
                for item in items.iter() {
                    writeln!(f, "#{} {}", item.id, item.title)?;
                    if !item.description.is_empty() {
                        writeln!(f, "    {}", item.description)?;
                    }
                }
            }
        }

        let previous = if self.can_go_previous { "[:prev]" } else { "[ -- ]" };
        let next = if self.can_go_next { "[:next]" } else { "[ -- ]" };
        writeln!(f, "{} page {} {}", previous, self.page, next)?;

        if let Some(error) = self.error {
            writeln!(f, "Error: {}", error)?;
        }

        Ok(())
    }
}
