//! Fixed-delay mock search engine.
//!
//! Every submission is queued with a deadline. Nothing is ever cancelled:
//! each queued search fires once its deadline passes.

use super::{ChatMessage, Role, SearchResult, Source, VideoDetails};
use crate::mode::Mode;
use log::debug;
use std::time::{Duration, Instant};

/// A submitted search waiting for its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub due: Instant,
    pub mode: Mode,
    pub query: String,
}

impl PendingSearch {
    /// Produce the mock payload for this search
    pub fn into_result(self) -> SearchResult {
        generate_results(self.mode, &self.query)
    }
}

/// Queue of in-flight mock searches
#[derive(Debug, Clone)]
pub struct MockEngine {
    delay: Duration,
    pending: Vec<PendingSearch>,
}

impl MockEngine {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    /// Queue a search that completes `delay` after `now`
    pub fn schedule(&mut self, mode: Mode, query: &str, now: Instant) -> Instant {
        let due = now + self.delay;
        debug!(
            "Scheduling {} search for {:?} ({} already pending)",
            mode,
            query,
            self.pending.len()
        );
        self.pending.push(PendingSearch {
            due,
            mode,
            query: query.to_string(),
        });
        due
    }

    /// Remove and return every search due at `now`, earliest deadline first
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingSearch> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|search| search.due <= now);
        self.pending = pending;
        // stable sort keeps submission order for equal deadlines
        due.sort_by_key(|search| search.due);
        due
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Map a mode and query to its canned payload.
///
/// Only chat looks at the query; every other mode returns static content.
pub fn generate_results(mode: Mode, query: &str) -> SearchResult {
    match mode {
        Mode::Smart => SearchResult::Smart {
            answer: "Here's an AI-enhanced analysis of your query...".to_string(),
            sources: vec![
                Source {
                    title: "Related Article 1".to_string(),
                    url: "#".to_string(),
                    relevance: "95%".to_string(),
                },
                Source {
                    title: "Research Paper".to_string(),
                    url: "#".to_string(),
                    relevance: "87%".to_string(),
                },
            ],
        },
        Mode::Image => SearchResult::Image {
            analysis: "Image analysis would show here...".to_string(),
            similar_images: vec![
                "/api/placeholder/200/200".to_string(),
                "/api/placeholder/200/200".to_string(),
            ],
        },
        Mode::Video => SearchResult::Video {
            status: "Generating video...".to_string(),
            preview: "/api/placeholder/640/360".to_string(),
            details: VideoDetails {
                duration: "00:30".to_string(),
                style: "Cinematic".to_string(),
                resolution: "1080p".to_string(),
            },
            generation_steps: [
                "Analyzing text description",
                "Generating storyboard",
                "Creating animation frames",
                "Adding transitions and effects",
                "Rendering final video",
            ]
            .iter()
            .map(|step| step.to_string())
            .collect(),
        },
        Mode::Code => SearchResult::Code {
            snippet: "console.log('Hello AI World!');".to_string(),
            explanation: "This code demonstrates...".to_string(),
            suggestions: vec![
                "Try using async/await".to_string(),
                "Consider error handling".to_string(),
            ],
        },
        Mode::Chat => SearchResult::Chat {
            messages: vec![
                ChatMessage {
                    role: Role::Assistant,
                    content: "How can I help you understand this topic better?".to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: query.to_string(),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_results_have_two_sources() {
        match generate_results(Mode::Smart, "anything") {
            SearchResult::Smart { answer, sources } => {
                assert!(answer.starts_with("Here's an AI-enhanced analysis"));
                assert_eq!(sources.len(), 2);
                assert_eq!(sources[0].title, "Related Article 1");
                assert_eq!(sources[0].relevance, "95%");
                assert_eq!(sources[1].title, "Research Paper");
                assert_eq!(sources[1].relevance, "87%");
            }
            other => panic!("expected smart result, got {:?}", other),
        }
    }

    #[test]
    fn test_chat_echoes_query_last() {
        match generate_results(Mode::Chat, "hello") {
            SearchResult::Chat { messages } => {
                assert_eq!(messages.len(), 2);
                assert_eq!(messages[0].role, Role::Assistant);
                let last = messages.last().unwrap();
                assert_eq!(last.role, Role::User);
                assert_eq!(last.content, "hello");
            }
            other => panic!("expected chat result, got {:?}", other),
        }
    }

    #[test]
    fn test_non_chat_modes_ignore_query() {
        for mode in [Mode::Smart, Mode::Image, Mode::Video, Mode::Code] {
            assert_eq!(
                generate_results(mode, "first"),
                generate_results(mode, "something else entirely")
            );
        }
    }

    #[test]
    fn test_video_payload() {
        match generate_results(Mode::Video, "") {
            SearchResult::Video {
                details,
                generation_steps,
                preview,
                ..
            } => {
                assert_eq!(details.duration, "00:30");
                assert_eq!(details.style, "Cinematic");
                assert_eq!(details.resolution, "1080p");
                assert_eq!(generation_steps.len(), 5);
                assert_eq!(generation_steps[4], "Rendering final video");
                assert_eq!(preview, "/api/placeholder/640/360");
            }
            other => panic!("expected video result, got {:?}", other),
        }
    }

    #[test]
    fn test_take_due_respects_deadlines() {
        let start = Instant::now();
        let mut engine = MockEngine::new(Duration::from_millis(1000));

        let due = engine.schedule(Mode::Smart, "a", start);
        engine.schedule(Mode::Chat, "b", start + Duration::from_millis(300));
        assert_eq!(due, start + Duration::from_millis(1000));
        assert_eq!(engine.pending_len(), 2);

        assert!(engine.take_due(start + Duration::from_millis(999)).is_empty());

        let fired = engine.take_due(start + Duration::from_millis(1000));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].mode, Mode::Smart);
        assert_eq!(engine.pending_len(), 1);

        let fired = engine.take_due(start + Duration::from_secs(5));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].query, "b");
        assert_eq!(engine.pending_len(), 0);
    }

    #[test]
    fn test_take_due_orders_by_deadline() {
        let start = Instant::now();
        let mut engine = MockEngine::new(Duration::from_millis(100));

        engine.schedule(Mode::Code, "late", start + Duration::from_millis(50));
        engine.schedule(Mode::Image, "early", start);
        engine.schedule(Mode::Video, "tie", start);

        let fired: Vec<String> = engine
            .take_due(start + Duration::from_secs(1))
            .into_iter()
            .map(|search| search.query)
            .collect();
        assert_eq!(fired, vec!["early", "tie", "late"]);
    }
}
