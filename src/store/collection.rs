//! The ordered contact collection shared by the bundled stores.

use crate::domain::{ContactId, NewContact};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct StoredContact {
    seq: u64,
    contact: Contact,
}

impl StoredContact {
    fn sort_key(&self) -> (DateTime<Utc>, u64) {
        (self.contact.created_at, self.seq)
    }
}

/// Contacts kept newest first, plus the next insertion sequence number.
///
/// Sequence numbers only grow, so an id is never handed out twice even after
/// the record holding it is deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContactCollection {
    next_seq: u64,
    contacts: Vec<StoredContact>,
}

impl ContactCollection {
    pub(crate) fn count(&self) -> u64 {
        self.contacts.len() as u64
    }

    pub(crate) fn slice(&self, skip: u64, limit: u64) -> Vec<Contact> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.contacts
            .iter()
            .skip(skip)
            .take(limit)
            .map(|stored| stored.contact.clone())
            .collect()
    }

    pub(crate) fn insert(
        &mut self,
        new: NewContact,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Contact> {
        let seq = self.next_seq;
        self.next_seq = seq
            .checked_add(1)
            .ok_or_else(|| StoreError::Corrupt("insertion sequence exhausted".to_string()))?;

        let secs = u32::try_from(created_at.timestamp().max(0)).unwrap_or(u32::MAX);
        let contact = Contact::from_new(ContactId::from_parts(secs, seq), new, created_at);
        let stored = StoredContact {
            seq,
            contact: contact.clone(),
        };

        let key = stored.sort_key();
        let pos = self.contacts.partition_point(|c| c.sort_key() > key);
        self.contacts.insert(pos, stored);
        Ok(contact)
    }

    pub(crate) fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        let pos = self.contacts.iter().position(|c| &c.contact.id == id)?;
        Some(self.contacts.remove(pos).contact)
    }

    /// Restore ordering and sequence invariants after loading from disk.
    pub(crate) fn normalize(&mut self) -> StoreResult<()> {
        let mut ids = HashSet::with_capacity(self.contacts.len());
        for stored in &self.contacts {
            if !ids.insert(stored.contact.id.clone()) {
                return Err(StoreError::Corrupt(format!(
                    "duplicate contact id {}",
                    stored.contact.id
                )));
            }
        }

        self.contacts.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        if let Some(max_seq) = self.contacts.iter().map(|c| c.seq).max() {
            let after_max = max_seq.checked_add(1).ok_or_else(|| {
                StoreError::Corrupt(format!("sequence number {} out of range", max_seq))
            })?;
            self.next_seq = self.next_seq.max(after_max);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_draft, ContactDraft};
    use chrono::{Duration, TimeZone};

    fn new_contact(name: &str) -> NewContact {
        validate_draft(&ContactDraft::new(name, "x@example.com", "1234567890")).unwrap()
    }

    fn names(contacts: &[Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name.to_string()).collect()
    }

    #[test]
    fn test_newest_first() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        col.insert(new_contact("a"), base).unwrap();
        col.insert(new_contact("c"), base + Duration::seconds(2)).unwrap();
        col.insert(new_contact("b"), base + Duration::seconds(1)).unwrap();

        assert_eq!(names(&col.slice(0, 10)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ties_list_later_insertion_first() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        col.insert(new_contact("first"), at).unwrap();
        col.insert(new_contact("second"), at).unwrap();

        assert_eq!(names(&col.slice(0, 10)), vec!["second", "first"]);
    }

    #[test]
    fn test_slice_bounds() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        for i in 0..5 {
            col.insert(new_contact(&format!("n{}", i)), at + Duration::seconds(i)).unwrap();
        }
        assert_eq!(names(&col.slice(2, 2)), vec!["n2", "n1"]);
        assert!(col.slice(5, 10).is_empty());
        assert!(col.slice(u64::MAX, 10).is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        let first = col.insert(new_contact("a"), at).unwrap();
        assert!(col.remove(&first.id).is_some());
        let second = col.insert(new_contact("a"), at).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_normalize_repairs_sequence() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        col.insert(new_contact("a"), at).unwrap();
        col.insert(new_contact("b"), at).unwrap();
        col.next_seq = 0;

        col.normalize().unwrap();
        let c = col.insert(new_contact("c"), at).unwrap();
        assert!(col.slice(0, 10).iter().filter(|x| x.id == c.id).count() == 1);
        assert_eq!(col.next_seq, 3);
    }

    #[test]
    fn test_normalize_rejects_duplicate_ids() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        col.insert(new_contact("a"), at).unwrap();
        let dup = col.contacts[0].clone();
        col.contacts.push(dup);

        assert!(matches!(col.normalize(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_normalize_rejects_sequence_at_limit() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        col.insert(new_contact("a"), at).unwrap();
        col.contacts[0].seq = u64::MAX;

        assert!(matches!(col.normalize(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_insert_fails_when_sequence_exhausted() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut col = ContactCollection::default();
        col.next_seq = u64::MAX;

        let result = col.insert(new_contact("a"), at);
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
        assert_eq!(col.count(), 0);
        assert_eq!(col.next_seq, u64::MAX);
    }
}
