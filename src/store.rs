use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Question, QuestionId, Topic, TopicId};

/// What happens when an edit starts while another one is still unsaved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Drop the unsaved edit and start the new one. Last edit wins.
    #[default]
    AbandonPriorEdit,
    /// Refuse the new edit until the active one is saved or cancelled.
    RejectIfEditInProgress,
}

impl EditPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditPolicy::AbandonPriorEdit => "abandon_prior_edit",
            EditPolicy::RejectIfEditInProgress => "reject_if_edit_in_progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Topic(TopicId),
    Question {
        topic_id: TopicId,
        question_id: QuestionId,
    },
}

impl EditTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            EditTarget::Topic(_) => "topic",
            EditTarget::Question { .. } => "question",
        }
    }

    pub fn fields(&self) -> &'static [EditField] {
        match self {
            EditTarget::Topic(_) => EditField::TOPIC,
            EditTarget::Question { .. } => EditField::QUESTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSession {
    Idle,
    Topic { id: TopicId, category: String },
    Question { topic_id: TopicId, staged: Question },
}

impl EditSession {
    pub fn target(&self) -> Option<EditTarget> {
        match self {
            EditSession::Idle => None,
            EditSession::Topic { id, .. } => Some(EditTarget::Topic(*id)),
            EditSession::Question { topic_id, staged } => Some(EditTarget::Question {
                topic_id: *topic_id,
                question_id: staged.id,
            }),
        }
    }

    fn touches_topic(&self, id: TopicId) -> bool {
        match self {
            EditSession::Idle => false,
            EditSession::Topic { id: t, .. } => *t == id,
            EditSession::Question { topic_id, .. } => *topic_id == id,
        }
    }
}

/// A staged field that text input can be routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Category,
    Title,
    Difficulty,
    Solution,
    TimeComplexity,
    SpaceComplexity,
}

impl EditField {
    pub const TOPIC: &'static [EditField] = &[EditField::Category];
    pub const QUESTION: &'static [EditField] = &[
        EditField::Title,
        EditField::Difficulty,
        EditField::Solution,
        EditField::TimeComplexity,
        EditField::SpaceComplexity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditField::Category => "Topic name",
            EditField::Title => "Title",
            EditField::Difficulty => "Difficulty",
            EditField::Solution => "Solution",
            EditField::TimeComplexity => "Time complexity",
            EditField::SpaceComplexity => "Space complexity",
        }
    }

    pub fn question_value<'a>(&self, question: &'a Question) -> Option<&'a str> {
        match self {
            EditField::Category => None,
            EditField::Title => Some(&question.title),
            EditField::Difficulty => Some(&question.difficulty),
            EditField::Solution => Some(&question.solution),
            EditField::TimeComplexity => Some(&question.time_complexity),
            EditField::SpaceComplexity => Some(&question.space_complexity),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("save or cancel the open {} edit first", .active.kind())]
    EditInProgress { active: EditTarget },
}

/// Millisecond timestamps, bumped past the last id handed out so that
/// ids stay unique when the clock has not moved.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn above(floor: i64) -> Self {
        Self { last: floor }
    }

    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last + 1);
        self.last = id;
        id
    }
}

#[derive(Debug, Clone)]
pub struct TopicStore {
    topics: Vec<Topic>,
    session: EditSession,
    policy: EditPolicy,
    ids: IdGenerator,
}

impl TopicStore {
    pub fn new(topics: Vec<Topic>, policy: EditPolicy) -> Self {
        let floor = topics
            .iter()
            .flat_map(|t| std::iter::once(t.id).chain(t.questions.iter().map(|q| q.id)))
            .max()
            .unwrap_or(0);

        Self {
            topics,
            session: EditSession::Idle,
            policy,
            ids: IdGenerator::above(floor),
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn question(&self, topic_id: TopicId, question_id: QuestionId) -> Option<&Question> {
        self.topic(topic_id).and_then(|t| t.question(question_id))
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    pub fn editing(&self) -> &EditSession {
        &self.session
    }

    pub fn is_editing(&self, target: EditTarget) -> bool {
        self.session.target() == Some(target)
    }

    pub fn add_topic(&mut self) -> TopicId {
        let id = self.ids.next_id();
        self.topics.push(Topic::new(id));
        debug!(topic_id = id, "added topic");

        if let Err(e) = self.begin_edit(EditTarget::Topic(id)) {
            info!(topic_id = id, error = %e, "new topic left unedited");
        }
        id
    }

    pub fn add_question(&mut self, topic_id: TopicId) -> Option<QuestionId> {
        let Some(topic) = self.topics.iter_mut().find(|t| t.id == topic_id) else {
            debug!(topic_id, "add_question: no such topic");
            return None;
        };
        let id = self.ids.next_id();
        topic.questions.push(Question::new(id));
        debug!(topic_id, question_id = id, "added question");

        let target = EditTarget::Question {
            topic_id,
            question_id: id,
        };
        if let Err(e) = self.begin_edit(target) {
            info!(topic_id, question_id = id, error = %e, "new question left unedited");
        }
        Some(id)
    }

    pub fn begin_edit(&mut self, target: EditTarget) -> Result<(), EditError> {
        let seeded = match target {
            EditTarget::Topic(id) => self.topic(id).map(|t| EditSession::Topic {
                id,
                category: t.category.clone(),
            }),
            EditTarget::Question {
                topic_id,
                question_id,
            } => self
                .question(topic_id, question_id)
                .map(|q| EditSession::Question {
                    topic_id,
                    staged: q.clone(),
                }),
        };

        let Some(seeded) = seeded else {
            debug!(?target, "begin_edit: no such item");
            return Ok(());
        };

        if let Some(active) = self.session.target() {
            match self.policy {
                EditPolicy::RejectIfEditInProgress if active == target => return Ok(()),
                EditPolicy::RejectIfEditInProgress => {
                    info!(?active, ?target, "edit rejected while another is in progress");
                    return Err(EditError::EditInProgress { active });
                }
                EditPolicy::AbandonPriorEdit if active != target => {
                    debug!(?active, ?target, "abandoning unsaved edit");
                }
                EditPolicy::AbandonPriorEdit => {}
            }
        }

        self.session = seeded;
        Ok(())
    }

    pub fn staged_field_mut(&mut self, field: EditField) -> Option<&mut String> {
        match (&mut self.session, field) {
            (EditSession::Topic { category, .. }, EditField::Category) => Some(category),
            (EditSession::Question { staged, .. }, EditField::Title) => Some(&mut staged.title),
            (EditSession::Question { staged, .. }, EditField::Difficulty) => {
                Some(&mut staged.difficulty)
            }
            (EditSession::Question { staged, .. }, EditField::Solution) => {
                Some(&mut staged.solution)
            }
            (EditSession::Question { staged, .. }, EditField::TimeComplexity) => {
                Some(&mut staged.time_complexity)
            }
            (EditSession::Question { staged, .. }, EditField::SpaceComplexity) => {
                Some(&mut staged.space_complexity)
            }
            _ => None,
        }
    }

    pub fn commit_edit(&mut self) {
        match std::mem::replace(&mut self.session, EditSession::Idle) {
            EditSession::Idle => debug!("commit_edit: nothing to commit"),
            EditSession::Topic { id, category } => {
                match self.topics.iter_mut().find(|t| t.id == id) {
                    Some(topic) => {
                        topic.category = category;
                        debug!(topic_id = id, "committed topic");
                    }
                    None => debug!(topic_id = id, "commit_edit: topic is gone"),
                }
            }
            EditSession::Question { topic_id, staged } => {
                let question_id = staged.id;
                let slot = self
                    .topics
                    .iter_mut()
                    .find(|t| t.id == topic_id)
                    .and_then(|t| t.questions.iter_mut().find(|q| q.id == question_id));
                match slot {
                    Some(question) => {
                        *question = staged;
                        debug!(topic_id, question_id, "committed question");
                    }
                    None => debug!(topic_id, question_id, "commit_edit: question is gone"),
                }
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(target) = self.session.target() {
            debug!(?target, "edit cancelled");
        }
        self.session = EditSession::Idle;
    }

    pub fn delete_topic(&mut self, id: TopicId) {
        let before = self.topics.len();
        self.topics.retain(|t| t.id != id);
        if self.topics.len() == before {
            debug!(topic_id = id, "delete_topic: no such topic");
            return;
        }
        debug!(topic_id = id, "deleted topic");

        if self.session.touches_topic(id) {
            self.session = EditSession::Idle;
        }
    }

    pub fn delete_question(&mut self, topic_id: TopicId, question_id: QuestionId) {
        let Some(topic) = self.topics.iter_mut().find(|t| t.id == topic_id) else {
            debug!(topic_id, question_id, "delete_question: no such topic");
            return;
        };
        let before = topic.questions.len();
        topic.questions.retain(|q| q.id != question_id);
        if topic.questions.len() == before {
            debug!(topic_id, question_id, "delete_question: no such question");
            return;
        }
        debug!(topic_id, question_id, "deleted question");

        let target = EditTarget::Question {
            topic_id,
            question_id,
        };
        if self.is_editing(target) {
            self.session = EditSession::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_topics;

    fn sample_store() -> TopicStore {
        TopicStore::new(sample_topics(), EditPolicy::AbandonPriorEdit)
    }

    fn empty_store(policy: EditPolicy) -> TopicStore {
        TopicStore::new(Vec::new(), policy)
    }

    fn ids(store: &TopicStore) -> Vec<TopicId> {
        store.topics().iter().map(|t| t.id).collect()
    }

    fn q(topic_id: TopicId, question_id: QuestionId) -> EditTarget {
        EditTarget::Question {
            topic_id,
            question_id,
        }
    }

    mod id_tests {
        use super::*;

        #[test]
        fn ids_are_strictly_increasing() {
            let mut gen = IdGenerator::above(0);
            let a = gen.next_id();
            let b = gen.next_id();
            let c = gen.next_id();
            assert!(a < b && b < c);
        }

        #[test]
        fn ids_start_above_floor() {
            let far_future = Utc::now().timestamp_millis() + 1_000_000;
            let mut gen = IdGenerator::above(far_future);
            assert_eq!(gen.next_id(), far_future + 1);
        }

        #[test]
        fn store_ids_do_not_collide_with_existing() {
            let mut store = sample_store();
            let existing: Vec<i64> = vec![1, 2, 101, 102, 201];
            let t = store.add_topic();
            let qid = store.add_question(t).unwrap();
            assert!(!existing.contains(&t));
            assert!(!existing.contains(&qid));
            assert_ne!(t, qid);
        }
    }

    mod topic_tests {
        use super::*;

        #[test]
        fn add_topic_appends_placeholder() {
            let mut store = sample_store();
            let id = store.add_topic();
            let last = store.topics().last().unwrap();
            assert_eq!(last.id, id);
            assert_eq!(last.category, "New Topic");
            assert!(last.questions.is_empty());
        }

        #[test]
        fn add_topic_enters_edit_mode() {
            let mut store = sample_store();
            let id = store.add_topic();
            assert_eq!(
                store.editing(),
                &EditSession::Topic {
                    id,
                    category: "New Topic".to_string()
                }
            );
        }

        #[test]
        fn add_and_delete_keep_survivors_in_insertion_order() {
            let mut store = empty_store(EditPolicy::AbandonPriorEdit);
            let a = store.add_topic();
            let b = store.add_topic();
            let c = store.add_topic();
            store.delete_topic(b);
            let d = store.add_topic();
            store.delete_topic(a);
            let e = store.add_topic();
            assert_eq!(ids(&store), vec![c, d, e]);
        }

        #[test]
        fn delete_topic_cascades_questions() {
            let mut store = sample_store();
            store.delete_topic(1);
            assert!(store.topic(1).is_none());
            assert!(store.question(1, 101).is_none());
            assert_eq!(ids(&store), vec![2]);
        }

        #[test]
        fn delete_missing_topic_is_noop() {
            let mut store = sample_store();
            let before = store.topics().to_vec();
            store.delete_topic(999);
            assert_eq!(store.topics(), before.as_slice());
        }

        #[test]
        fn delete_topic_clears_session_on_it() {
            let mut store = sample_store();
            store.begin_edit(q(1, 101)).unwrap();
            store.delete_topic(1);
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn delete_other_topic_keeps_session() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            store.delete_topic(2);
            assert!(store.is_editing(EditTarget::Topic(1)));
        }

        #[test]
        fn rename_topic_through_session() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(2)).unwrap();
            *store.staged_field_mut(EditField::Category).unwrap() = "Lists".to_string();
            store.commit_edit();
            assert_eq!(store.topic(2).unwrap().category, "Lists");
            assert_eq!(store.topic(1).unwrap().category, "Arrays");
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn duplicate_names_are_allowed() {
            let mut store = sample_store();
            store.add_topic();
            store.commit_edit();
            store.add_topic();
            store.commit_edit();
            let names: Vec<_> = store
                .topics()
                .iter()
                .filter(|t| t.category == "New Topic")
                .collect();
            assert_eq!(names.len(), 2);
        }
    }

    mod question_tests {
        use super::*;

        #[test]
        fn add_question_commit_touches_only_target_topic() {
            let mut store = sample_store();
            let untouched = store.topic(2).unwrap().clone();

            let qid = store.add_question(1).unwrap();
            *store.staged_field_mut(EditField::Title).unwrap() = "X".to_string();
            store.commit_edit();

            let arrays = store.topic(1).unwrap();
            assert_eq!(arrays.questions.len(), 3);
            assert_eq!(arrays.question(qid).unwrap().title, "X");
            assert_eq!(store.topic(2).unwrap(), &untouched);
        }

        #[test]
        fn add_question_to_missing_topic_is_noop() {
            let mut store = sample_store();
            let before = store.topics().to_vec();
            assert_eq!(store.add_question(42), None);
            assert_eq!(store.topics(), before.as_slice());
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn add_question_stages_placeholder() {
            let mut store = sample_store();
            let qid = store.add_question(2).unwrap();
            match store.editing() {
                EditSession::Question { topic_id, staged } => {
                    assert_eq!(*topic_id, 2);
                    assert_eq!(staged, &Question::new(qid));
                }
                other => panic!("Expected question session, got {:?}", other),
            }
        }

        #[test]
        fn commit_replaces_all_question_fields() {
            let mut store = sample_store();
            store.begin_edit(q(1, 102)).unwrap();
            *store.staged_field_mut(EditField::Title).unwrap() = "Max Subarray".to_string();
            *store.staged_field_mut(EditField::Difficulty).unwrap() = "Hard".to_string();
            *store.staged_field_mut(EditField::Solution).unwrap() = "Divide and conquer".to_string();
            *store.staged_field_mut(EditField::TimeComplexity).unwrap() = "O(n log n)".to_string();
            *store.staged_field_mut(EditField::SpaceComplexity).unwrap() = "O(log n)".to_string();
            store.commit_edit();

            let question = store.question(1, 102).unwrap();
            assert_eq!(question.id, 102);
            assert_eq!(question.title, "Max Subarray");
            assert_eq!(question.difficulty, "Hard");
            assert_eq!(question.solution, "Divide and conquer");
            assert_eq!(question.time_complexity, "O(n log n)");
            assert_eq!(question.space_complexity, "O(log n)");
            assert_eq!(store.question(1, 101).unwrap().title, "Two Sum");
        }

        #[test]
        fn delete_question_removes_only_that_question() {
            let mut store = sample_store();
            store.delete_question(1, 101);
            let arrays = store.topic(1).unwrap();
            assert_eq!(arrays.questions.len(), 1);
            assert_eq!(arrays.questions[0].id, 102);
            assert_eq!(store.topic(2).unwrap().questions.len(), 1);
        }

        #[test]
        fn delete_question_with_unknown_ids_is_noop() {
            let mut store = sample_store();
            let before = store.topics().to_vec();
            store.delete_question(999, 101);
            store.delete_question(1, 999);
            store.delete_question(2, 101);
            assert_eq!(store.topics(), before.as_slice());
        }

        #[test]
        fn delete_question_clears_its_session() {
            let mut store = sample_store();
            store.begin_edit(q(2, 201)).unwrap();
            store.delete_question(2, 201);
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn delete_sibling_question_keeps_session() {
            let mut store = sample_store();
            store.begin_edit(q(1, 101)).unwrap();
            store.delete_question(1, 102);
            assert!(store.is_editing(q(1, 101)));
        }
    }

    mod session_tests {
        use super::*;

        #[test]
        fn commit_while_idle_is_noop() {
            let mut store = sample_store();
            let before = store.topics().to_vec();
            store.commit_edit();
            assert_eq!(store.topics(), before.as_slice());
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn begin_edit_on_missing_item_is_noop() {
            let mut store = sample_store();
            assert_eq!(store.begin_edit(EditTarget::Topic(77)), Ok(()));
            assert_eq!(store.begin_edit(q(1, 201)), Ok(()));
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn begin_edit_seeds_staging_copy() {
            let mut store = sample_store();
            store.begin_edit(q(1, 101)).unwrap();
            match store.editing() {
                EditSession::Question { staged, .. } => {
                    assert_eq!(staged, store.question(1, 101).unwrap());
                }
                other => panic!("Expected question session, got {:?}", other),
            }
        }

        #[test]
        fn staged_changes_are_invisible_until_commit() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            store.staged_field_mut(EditField::Category).unwrap().push_str(" & Strings");
            assert_eq!(store.topic(1).unwrap().category, "Arrays");
            store.commit_edit();
            assert_eq!(store.topic(1).unwrap().category, "Arrays & Strings");
        }

        #[test]
        fn cancel_discards_staged_changes() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            *store.staged_field_mut(EditField::Category).unwrap() = "Nope".to_string();
            store.cancel_edit();
            store.commit_edit();
            assert_eq!(store.topic(1).unwrap().category, "Arrays");
            assert_eq!(store.editing(), &EditSession::Idle);
        }

        #[test]
        fn staged_field_mismatch_returns_none() {
            let mut store = sample_store();
            assert!(store.staged_field_mut(EditField::Category).is_none());
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            assert!(store.staged_field_mut(EditField::Title).is_none());
            store.begin_edit(q(1, 101)).unwrap();
            assert!(store.staged_field_mut(EditField::Category).is_none());
        }

        #[test]
        fn deleted_item_is_not_resurrected_by_commit() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(2)).unwrap();
            store.delete_topic(2);
            store.commit_edit();
            assert!(store.topic(2).is_none());
            assert_eq!(ids(&store), vec![1]);
        }
    }

    mod policy_tests {
        use super::*;

        #[test]
        fn abandon_policy_last_edit_wins() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            *store.staged_field_mut(EditField::Category).unwrap() = "Lost".to_string();

            assert_eq!(store.begin_edit(q(2, 201)), Ok(()));
            assert!(store.is_editing(q(2, 201)));
            store.commit_edit();
            assert_eq!(store.topic(1).unwrap().category, "Arrays");
        }

        #[test]
        fn abandon_policy_reseeds_same_target() {
            let mut store = sample_store();
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            *store.staged_field_mut(EditField::Category).unwrap() = "Draft".to_string();
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            assert_eq!(
                store.editing(),
                &EditSession::Topic {
                    id: 1,
                    category: "Arrays".to_string()
                }
            );
        }

        #[test]
        fn reject_policy_refuses_second_edit() {
            let mut store = TopicStore::new(sample_topics(), EditPolicy::RejectIfEditInProgress);
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            *store.staged_field_mut(EditField::Category).unwrap() = "Kept".to_string();

            let err = store.begin_edit(q(2, 201)).unwrap_err();
            assert_eq!(
                err,
                EditError::EditInProgress {
                    active: EditTarget::Topic(1)
                }
            );
            store.commit_edit();
            assert_eq!(store.topic(1).unwrap().category, "Kept");
        }

        #[test]
        fn rejection_message_names_open_edit() {
            let err = EditError::EditInProgress {
                active: q(1, 101),
            };
            assert_eq!(err.to_string(), "save or cancel the open question edit first");
        }

        #[test]
        fn reject_policy_same_target_keeps_staging() {
            let mut store = TopicStore::new(sample_topics(), EditPolicy::RejectIfEditInProgress);
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            *store.staged_field_mut(EditField::Category).unwrap() = "Draft".to_string();
            assert_eq!(store.begin_edit(EditTarget::Topic(1)), Ok(()));
            assert_eq!(
                store.editing(),
                &EditSession::Topic {
                    id: 1,
                    category: "Draft".to_string()
                }
            );
        }

        #[test]
        fn reject_policy_still_adds_items() {
            let mut store = TopicStore::new(sample_topics(), EditPolicy::RejectIfEditInProgress);
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            let id = store.add_topic();
            assert!(store.topic(id).is_some());
            assert!(store.is_editing(EditTarget::Topic(1)));

            let qid = store.add_question(2).unwrap();
            assert!(store.question(2, qid).is_some());
            assert!(store.is_editing(EditTarget::Topic(1)));
        }

        #[test]
        fn reject_policy_allows_edit_after_cancel() {
            let mut store = TopicStore::new(sample_topics(), EditPolicy::RejectIfEditInProgress);
            store.begin_edit(EditTarget::Topic(1)).unwrap();
            store.cancel_edit();
            assert_eq!(store.begin_edit(EditTarget::Topic(2)), Ok(()));
        }

        #[test]
        fn policy_deserializes_from_snake_case() {
            #[derive(Deserialize)]
            struct Wrapper {
                policy: EditPolicy,
            }
            let w: Wrapper = toml::from_str("policy = \"reject_if_edit_in_progress\"").unwrap();
            assert_eq!(w.policy, EditPolicy::RejectIfEditInProgress);
            assert_eq!(w.policy.as_str(), "reject_if_edit_in_progress");
        }
    }

    mod field_tests {
        use super::*;

        #[test]
        fn target_fields() {
            assert_eq!(EditTarget::Topic(1).fields(), &[EditField::Category]);
            assert_eq!(q(1, 2).fields().len(), 5);
            assert_eq!(q(1, 2).fields()[0], EditField::Title);
        }

        #[test]
        fn question_value_reads_fields() {
            let question = sample_topics()[0].questions[1].clone();
            assert_eq!(EditField::Title.question_value(&question), Some("Maximum Subarray"));
            assert_eq!(EditField::SpaceComplexity.question_value(&question), Some("O(1)"));
            assert_eq!(EditField::Category.question_value(&question), None);
        }

        #[test]
        fn session_target_roundtrip() {
            let mut store = sample_store();
            assert_eq!(store.editing().target(), None);
            store.begin_edit(q(1, 102)).unwrap();
            assert_eq!(store.editing().target(), Some(q(1, 102)));
        }
    }
}
