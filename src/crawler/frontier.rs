//! Crawl frontier and visited set
//!
//! This module handles:
//! - The FIFO queue of URLs waiting to be fetched (breadth-first order),
//!   each with its navigation depth from the seed
//! - The visited set, marked when a fetch is attempted
//! - The seen set, which keeps a URL from being enqueued twice
//!
//! A `Frontier` is owned by a single crawl and never shared or persisted.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Breadth-first frontier with visited tracking
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be fetched with their depth, in discovery order
    queue: VecDeque<(Url, usize)>,

    /// Every URL ever enqueued (or marked visited)
    seen: HashSet<String>,

    /// URLs whose fetch has been attempted
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL at depth 0
    pub fn new(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed, 0);
        frontier
    }

    /// Appends a URL found at the given depth to the back of the queue
    ///
    /// # Returns
    ///
    /// * `true` - The URL was newly enqueued
    /// * `false` - The URL was already enqueued or visited
    pub fn push(&mut self, url: Url, depth: usize) -> bool {
        if !self.seen.insert(url.as_str().to_string()) {
            return false;
        }

        self.queue.push_back((url, depth));
        true
    }

    /// Pops the next URL that has not been visited yet, with its depth
    ///
    /// URLs marked visited while waiting in the queue are dropped.
    pub fn pop(&mut self) -> Option<(Url, usize)> {
        while let Some((url, depth)) = self.queue.pop_front() {
            if !self.is_visited(&url) {
                return Some((url, depth));
            }
            tracing::trace!("Skipping already visited {}", url);
        }
        None
    }

    /// Marks a URL as visited
    ///
    /// Called when a fetch is attempted, before its result is known, so a
    /// failing page is never retried.
    ///
    /// # Returns
    ///
    /// * `true` - The URL was not visited before
    /// * `false` - The URL had already been visited
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        self.seen.insert(url.as_str().to_string());
        self.visited.insert(url.as_str().to_string())
    }

    /// Returns true if the URL's fetch has been attempted
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Number of URLs whose fetch has been attempted
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://example.com{}", path)).unwrap()
    }

    #[test]
    fn test_new_holds_seed() {
        let mut frontier = Frontier::new(url("/"));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop(), Some((url("/"), 0)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new(url("/"));
        frontier.push(url("/a"), 1);
        frontier.push(url("/b"), 1);
        frontier.push(url("/c"), 2);

        let order: Vec<(String, usize)> = std::iter::from_fn(|| frontier.pop())
            .map(|(u, depth)| (u.path().to_string(), depth))
            .collect();
        assert_eq!(
            order,
            [
                ("/".to_string(), 0),
                ("/a".to_string(), 1),
                ("/b".to_string(), 1),
                ("/c".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_push_deduplicates() {
        let mut frontier = Frontier::new(url("/"));
        assert!(frontier.push(url("/a"), 1));
        assert!(!frontier.push(url("/a"), 2));
        assert!(!frontier.push(url("/"), 1));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_first_discovery_keeps_shallowest_depth() {
        let mut frontier = Frontier::new(url("/"));
        frontier.pop();
        frontier.push(url("/a"), 1);
        frontier.push(url("/a"), 3);
        assert_eq!(frontier.pop(), Some((url("/a"), 1)));
    }

    #[test]
    fn test_visited_url_never_requeued() {
        let mut frontier = Frontier::new(url("/"));
        let (seed, _) = frontier.pop().unwrap();
        assert!(frontier.mark_visited(&seed));

        assert!(!frontier.push(url("/"), 1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_mark_visited_twice() {
        let mut frontier = Frontier::default();
        assert!(frontier.mark_visited(&url("/x")));
        assert!(!frontier.mark_visited(&url("/x")));
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn test_pop_skips_urls_visited_while_queued() {
        let mut frontier = Frontier::new(url("/"));
        frontier.push(url("/old"), 1);
        frontier.push(url("/new"), 1);

        // e.g. "/" redirected to "/new"
        frontier.mark_visited(&url("/new"));

        assert_eq!(frontier.pop(), Some((url("/"), 0)));
        assert_eq!(frontier.pop(), Some((url("/old"), 1)));
        assert_eq!(frontier.pop(), None);
    }
}
