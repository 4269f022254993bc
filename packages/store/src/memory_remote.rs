use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::defaults::DEFAULT_PASSWORD;
use crate::models::{Profile, Section};
use crate::remote::{RemoteError, RemoteStore};

/// In-memory two-table RemoteStore for testing.
///
/// Holds `profiles` and `sections` rows the way the real backend would,
/// including assigned ids, password columns, and section positions. The
/// `offline` toggle makes every operation fail with
/// [`RemoteError::Unreachable`] so fallback paths can be exercised.
#[derive(Clone, Debug, Default)]
pub struct MemoryRemote {
    profiles: Arc<Mutex<Vec<ProfileRow>>>,
    sections: Arc<Mutex<Vec<SectionRow>>>,
    offline: Arc<AtomicBool>,
    next_id: Arc<AtomicU64>,
}

#[derive(Clone, Debug)]
struct ProfileRow {
    profile: Profile,
    password: String,
}

#[derive(Clone, Debug)]
struct SectionRow {
    section: Section,
    position: i32,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.lock().unwrap().len()
    }

    /// `(section id, position)` pairs in insertion order, for asserting on
    /// persisted positions directly.
    pub fn section_positions(&self) -> Vec<(String, i32)> {
        self.sections
            .lock()
            .unwrap()
            .iter()
            .map(|row| (row.section.id.clone(), row.position))
            .collect()
    }

    /// The stored password of the first profile row.
    pub fn stored_password(&self) -> Option<String> {
        self.profiles
            .lock()
            .unwrap()
            .first()
            .map(|row| row.password.clone())
    }

    fn guard(&self) -> Result<(), RemoteError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RemoteError::Unreachable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn assign_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("00000000-0000-0000-0000-{n:012}")
    }
}

impl RemoteStore for MemoryRemote {
    async fn fetch_profile(&self) -> Result<Option<Profile>, RemoteError> {
        self.guard()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .first()
            .map(|row| row.profile.clone()))
    }

    async fn fetch_sections(&self) -> Result<Vec<Section>, RemoteError> {
        self.guard()?;
        let mut rows = self.sections.lock().unwrap().clone();
        rows.sort_by_key(|row| row.position);
        Ok(rows.into_iter().map(|row| row.section).collect())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RemoteError> {
        self.guard()?;
        let mut profiles = self.profiles.lock().unwrap();

        // Resolve an id: the caller's, else the existing singleton's.
        let target_id = profile
            .id
            .clone()
            .or_else(|| profiles.first().and_then(|row| row.profile.id.clone()));

        if let Some(id) = target_id {
            if let Some(row) = profiles
                .iter_mut()
                .find(|row| row.profile.id.as_deref() == Some(id.as_str()))
            {
                let mut updated = profile.clone();
                updated.id = Some(id);
                row.profile = updated.clone();
                return Ok(updated);
            }
        }

        // Creation branch: no password supplied, the column default applies.
        let mut created = profile.clone();
        created.id = Some(self.assign_id());
        profiles.push(ProfileRow {
            profile: created.clone(),
            password: DEFAULT_PASSWORD.to_string(),
        });
        Ok(created)
    }

    async fn upsert_sections(&self, sections: &[Section]) -> Result<(), RemoteError> {
        self.guard()?;
        let mut rows = self.sections.lock().unwrap();
        for (index, section) in sections.iter().enumerate() {
            let position = index as i32;
            match rows.iter_mut().find(|row| row.section.id == section.id) {
                Some(row) => {
                    row.section = section.clone();
                    row.position = position;
                }
                None => rows.push(SectionRow {
                    section: section.clone(),
                    position,
                }),
            }
        }
        Ok(())
    }

    async fn insert_profile(
        &self,
        profile: &Profile,
        password: &str,
    ) -> Result<Profile, RemoteError> {
        self.guard()?;
        let mut created = profile.clone();
        created.id = Some(self.assign_id());
        self.profiles.lock().unwrap().push(ProfileRow {
            profile: created.clone(),
            password: password.to_string(),
        });
        Ok(created)
    }

    async fn insert_sections(&self, sections: &[Section]) -> Result<(), RemoteError> {
        self.guard()?;
        let mut rows = self.sections.lock().unwrap();
        for (index, section) in sections.iter().enumerate() {
            rows.push(SectionRow {
                section: section.clone(),
                position: index as i32,
            });
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RemoteError> {
        self.guard()?;
        self.sections.lock().unwrap().clear();
        self.profiles.lock().unwrap().clear();
        Ok(())
    }

    async fn fetch_password(&self) -> Result<Option<String>, RemoteError> {
        self.guard()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .first()
            .map(|row| row.password.clone()))
    }

    async fn update_password(&self, new_password: &str) -> Result<(), RemoteError> {
        self.guard()?;
        for row in self.profiles.lock().unwrap().iter_mut() {
            row.password = new_password.to_string();
        }
        Ok(())
    }
}
