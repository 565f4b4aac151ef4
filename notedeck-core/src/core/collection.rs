//! The note collection: a backing record set and the filtered, sorted view over it.

use crate::core::filter::{tag_filter, task_filter};
use crate::{
    comparators, compare, CollectionOptions, Filter, FilterOptions, FuzzySearcher,
    Pagination, Record, RecordSource, Result, SortKey,
};

/// A filterable, sortable, paginated view over a set of records.
///
/// The backing set is only ever replaced wholesale through [`reset`](Self::reset)
/// or [`reload`](Self::reload). The visible set is derived from it by the
/// active filter and the comparator, and is recomputed on every
/// [`filter_list`](Self::filter_list) call; it is never edited in place.
///
/// ```rust
/// use notedeck_core::{Collection, CollectionOptions, FilterOptions, Note};
///
/// let mut shopping = Note::new("1", "Shopping List");
/// shopping.task_all = 3;
/// shopping.task_completed = 1;
/// let mut trip = Note::new("2", "Trip Plan");
/// trip.trash = 1;
///
/// let mut notes = Collection::new(CollectionOptions::default(), vec![shopping, trip]);
/// notes.filter_list(Some("active"), &FilterOptions::default()).unwrap();
/// assert_eq!(notes.visible().len(), 1);
/// assert_eq!(notes.visible()[0].title, "Shopping List");
/// ```
pub struct Collection<R: Record> {
    records: Vec<R>,
    options: CollectionOptions,
    comparators: Vec<SortKey>,
    filter: Filter,
    visible: Vec<usize>,
    pagination: Pagination,
}

impl<R: Record> Collection<R> {
    /// Creates an unfiltered collection over `records`.
    pub fn new(options: CollectionOptions, records: Vec<R>) -> Self {
        let comparators = comparators(&options);
        let pagination = Pagination::new(options.per_page());
        let mut collection = Self {
            records,
            options,
            comparators,
            filter: Filter::None,
            visible: Vec::new(),
            pagination,
        };
        collection.visible = collection.sorted((0..collection.records.len()).collect());
        collection
    }

    /// Loads the backing set from `source` and creates an unfiltered collection over it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RecordSource::load`].
    pub fn from_source<S: RecordSource<R>>(options: CollectionOptions, source: &S) -> Result<Self> {
        Ok(Self::new(options, source.load()?))
    }

    pub fn options(&self) -> &CollectionOptions {
        &self.options
    }

    /// The sort keys the visible set is ordered by.
    pub fn comparators(&self) -> &[SortKey] {
        &self.comparators
    }

    /// Applies the filter named `name` and replaces the visible set with its result.
    ///
    /// A missing, empty or unknown name leaves the collection untouched, and
    /// so does a search with empty text: the current view, the active filter
    /// and the current page all stay as they were. Otherwise filters do not
    /// stack: the previous filter is discarded and the view returns to the
    /// first page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotedeckError::InvalidPattern`] if the `search`
    /// filter's text does not compile. The visible set is unchanged in that case.
    pub fn filter_list(&mut self, name: Option<&str>, options: &FilterOptions) -> Result<()> {
        let filter = Filter::resolve(name, options);
        if filter == Filter::None {
            log::trace!("ignoring unknown filter {name:?}");
            return Ok(());
        }

        let Some(selected) = filter.apply(&self.records)? else {
            log::trace!("filter {name:?} selects everything; view unchanged");
            return Ok(());
        };
        self.visible = self.sorted(selected);
        self.filter = filter;
        self.pagination.first();

        log::debug!(
            "applied filter {}: {} of {} notes visible",
            self.filter.name().unwrap_or("none"),
            self.visible.len(),
            self.records.len()
        );
        Ok(())
    }

    /// Every visible record in comparator order, across all pages.
    pub fn visible(&self) -> Vec<&R> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    /// The visible records on the current page.
    pub fn page(&self) -> Vec<&R> {
        self.visible[self.pagination.page_range(self.visible.len())]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.visible.len())
    }

    pub fn next_page(&mut self) -> usize {
        self.pagination.next(self.visible.len())
    }

    pub fn previous_page(&mut self) -> usize {
        self.pagination.previous(self.visible.len())
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.pagination.go_to(page, self.visible.len())
    }

    /// Number of records in the backing set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the visible set, across all pages.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_filtered(&self) -> bool {
        self.filter != Filter::None
    }

    /// The filter currently shaping the visible set.
    pub fn active_filter(&self) -> &Filter {
        &self.filter
    }

    /// Looks a record up in the backing set by id, regardless of the active filter.
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.text("id") == id)
    }

    /// Records with unfinished tasks, in comparator order. Does not change the view.
    pub fn task_filter(&self) -> Vec<&R> {
        self.matching(|r| task_filter(r))
    }

    /// Non-trashed records tagged `tag`, in comparator order. Does not change the view.
    pub fn tag_filter(&self, tag: &str) -> Vec<&R> {
        self.matching(|r| tag_filter(r, tag))
    }

    /// Records whose title or content matches `text`, in comparator order.
    /// Empty text returns the current view unchanged. Does not change the view.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotedeckError::InvalidPattern`] if `text` does not compile.
    pub fn search_filter(&self, text: Option<&str>) -> Result<Vec<&R>> {
        match Filter::Search(text.map(str::to_string)).apply(&self.records)? {
            Some(selected) => Ok(self.sorted(selected).into_iter().map(|i| &self.records[i]).collect()),
            None => Ok(self.visible()),
        }
    }

    /// Fuzzy-matches `text` against every title in the backing set, best match first.
    ///
    /// Ignores the active filter and the current page; never changes the view.
    pub fn fuzzy_search(&self, text: &str) -> Vec<&R> {
        match FuzzySearcher::new(text) {
            Some(mut searcher) => searcher
                .rank(&self.records)
                .into_iter()
                .map(|(record, _)| record)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Replaces the backing set and re-applies the active filter to it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotedeckError::InvalidPattern`] only if the active
    /// filter is a search whose pattern no longer compiles.
    pub fn reset(&mut self, records: Vec<R>) -> Result<()> {
        self.records = records;
        let selected = self
            .filter
            .apply(&self.records)?
            .unwrap_or_else(|| (0..self.records.len()).collect());
        self.visible = self.sorted(selected);
        let (current, total) = (self.pagination.current(), self.visible.len());
        self.pagination.go_to(current, total);
        Ok(())
    }

    /// Reloads the backing set from `source`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RecordSource::load`].
    pub fn reload<S: RecordSource<R>>(&mut self, source: &S) -> Result<()> {
        self.reset(source.load()?)
    }

    fn matching(&self, predicate: impl Fn(&R) -> bool) -> Vec<&R> {
        let selected = (0..self.records.len())
            .filter(|&i| predicate(&self.records[i]))
            .collect();
        self.sorted(selected).into_iter().map(|i| &self.records[i]).collect()
    }

    fn sorted(&self, mut indices: Vec<usize>) -> Vec<usize> {
        indices.sort_by(|&a, &b| compare(&self.records[a], &self.records[b], &self.comparators));
        indices
    }
}
