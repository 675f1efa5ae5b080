/// Snapshot of the parameters for one page fetch. The generation ties the
/// eventual result back to the search it was issued under.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub generation: u64,
    pub query: String,
    pub page: u32,
    pub page_size: usize,
}

/// Mutable state of the active search: query, next page to request, and
/// whether the API has run out of results.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    page: u32,
    page_size: usize,
    exhausted: bool,
    generation: u64,
}

impl SearchSession {
    pub fn new(query: impl Into<String>, page_size: usize) -> Self {
        Self {
            query: query.into(),
            page: 1,
            page_size,
            exhausted: false,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new search. Bumping the generation invalidates any fetch still
    /// in flight for the previous query.
    pub fn reset(&mut self, new_query: impl Into<String>) {
        self.query = new_query.into();
        self.page = 1;
        self.exhausted = false;
        self.generation += 1;
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            generation: self.generation,
            query: self.query.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Record the outcome of a successful page fetch. Returns false (and
    /// changes nothing) when the result belongs to a superseded search.
    pub fn apply(&mut self, generation: u64, has_more: bool) -> bool {
        if generation != self.generation {
            return false;
        }
        self.page += 1;
        self.exhausted = !has_more;
        true
    }
}
