//! Implementation of ProfileStorage trait for SQLite storage.

use duplex_storage_traits::ParticipantId;
use duplex_storage_traits::profiles::ProfileStorage;
use duplex_storage_traits::profiles::error::ProfileError;
use duplex_storage_traits::profiles::types::Profile;
use rusqlite::{OptionalExtension, params};

use crate::{DuplexSqliteStorage, db};

#[inline]
fn into_profile_err<T>(e: T) -> ProfileError
where
    T: std::error::Error,
{
    ProfileError::DatabaseError(e.to_string())
}

impl ProfileStorage for DuplexSqliteStorage {
    fn upsert_profile(&self, profile: Profile) -> Result<(), ProfileError> {
        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO profiles (participant_id, username, display_color, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(participant_id) DO UPDATE SET
                    username = excluded.username,
                    display_color = excluded.display_color,
                    updated_at = excluded.updated_at",
                params![
                    profile.participant_id.as_str(),
                    &profile.username,
                    &profile.display_color,
                    profile.updated_at.as_millis(),
                ],
            )
            .map_err(into_profile_err)?;

            Ok(())
        })
    }

    fn find_profile(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Option<Profile>, ProfileError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT participant_id, username, display_color, updated_at
                     FROM profiles
                     WHERE participant_id = ?",
                )
                .map_err(into_profile_err)?;

            stmt.query_row(params![participant_id.as_str()], db::row_to_profile)
                .optional()
                .map_err(into_profile_err)
        })
    }

    fn all_profiles(&self) -> Result<Vec<Profile>, ProfileError> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT participant_id, username, display_color, updated_at
                     FROM profiles
                     ORDER BY username ASC, participant_id ASC",
                )
                .map_err(into_profile_err)?;

            let rows = stmt
                .query_map([], db::row_to_profile)
                .map_err(into_profile_err)?;

            rows.collect::<Result<Vec<_>, _>>().map_err(into_profile_err)
        })
    }
}
