//! The asset status state machine and its transition side effects.
//!
//! Any state may move to any other state; the status field is flat, not an
//! ordered workflow. What the service owns is the side-effect contract:
//! entering a release state ([`Status::clears_owner`]) clears `owner` in the
//! same atomic update, so a returned/disposed/sold/lost/stored asset never
//! keeps a stale holder. Unknown status strings never reach this layer; the
//! closed [`Status`] enum rejects them at parse time.

use rusqlite::{Connection, params};

use crate::db::store;
use crate::error::{RegistryError, Result};
use crate::model::{Asset, Status};

/// Apply a transition to an in-memory record.
///
/// Pure counterpart of [`transition`]; used by callers that stage changes
/// before persisting and by tests of the side-effect contract itself.
pub fn apply(asset: &mut Asset, next: Status) {
    if next.clears_owner() {
        asset.owner.clear();
    }
    asset.status = next;
}

/// Persist a status transition and return the updated record.
///
/// The status change and the owner-clearing side effect land in one SQL
/// `UPDATE`, so no reader can observe a release state with a stale owner.
///
/// # Errors
///
/// `NotFound` when `id` does not exist; `Unavailable` on store failures.
pub fn transition(conn: &Connection, id: i64, next: Status) -> Result<Asset> {
    let changed = if next.clears_owner() {
        conn.execute(
            "UPDATE assets SET status = ?1, owner = '' WHERE id = ?2",
            params![next.as_str(), id],
        )?
    } else {
        conn.execute(
            "UPDATE assets SET status = ?1 WHERE id = ?2",
            params![next.as_str(), id],
        )?
    };

    if changed == 0 {
        return Err(RegistryError::NotFound { id });
    }

    tracing::info!(
        id,
        status = %next,
        owner_cleared = next.clears_owner(),
        "status transition"
    );
    store::get(conn, id)
}

/// Publish a draft record into active reporting.
///
/// Mechanically identical to any other status update; the distinct verb
/// exists because `draft -> normal` is the one transition users think of as
/// "forward".
///
/// # Errors
///
/// `NotFound` when `id` does not exist.
pub fn publish(conn: &Connection, id: i64) -> Result<Asset> {
    transition(conn, id, Status::Normal)
}

#[cfg(test)]
mod tests {
    use super::{apply, publish, transition};
    use crate::db::store::tests::{new_asset, test_conn};
    use crate::db::store;
    use crate::error::RegistryError;
    use crate::model::Status;

    #[test]
    fn release_states_clear_the_owner() {
        for status in [
            Status::ReturnedResigned,
            Status::Disposed,
            Status::Sold,
            Status::Lost,
            Status::InStorage,
        ] {
            let conn = test_conn();
            let asset =
                store::insert(&conn, &new_asset("IT-24001", "영업1팀 김철수", 3_500_000)).unwrap();

            let updated = transition(&conn, asset.id, status).unwrap();
            assert_eq!(updated.status, status);
            assert_eq!(updated.owner, "", "owner must be cleared for {status}");
        }
    }

    #[test]
    fn holding_states_leave_the_owner_untouched() {
        for status in [Status::Normal, Status::InRepair, Status::Draft] {
            let conn = test_conn();
            let asset =
                store::insert(&conn, &new_asset("IT-24001", "개발2팀 강동현", 2_000_000)).unwrap();

            let updated = transition(&conn, asset.id, status).unwrap();
            assert_eq!(updated.status, status);
            assert_eq!(updated.owner, "개발2팀 강동현");
        }
    }

    #[test]
    fn lost_asset_scenario() {
        // Register IT-24001 at 3,500,000 with the default status, mark it
        // lost, and the holder must be released in the same update.
        let conn = test_conn();
        let asset =
            store::insert(&conn, &new_asset("IT-24001", "영업1팀 김철수", 3_500_000)).unwrap();
        assert_eq!(asset.status, Status::Normal);

        let updated = transition(&conn, asset.id, Status::Lost).unwrap();
        assert_eq!(updated.status, Status::Lost);
        assert_eq!(updated.owner, "");
    }

    #[test]
    fn any_state_may_move_to_any_other() {
        let conn = test_conn();
        let asset = store::insert(&conn, &new_asset("IT-24001", "", 1)).unwrap();

        // A walk that an ordered workflow would reject.
        for status in [
            Status::Disposed,
            Status::Normal,
            Status::Lost,
            Status::Draft,
            Status::Sold,
            Status::InRepair,
        ] {
            let updated = transition(&conn, asset.id, status).unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[test]
    fn transition_on_missing_id_is_not_found() {
        let conn = test_conn();
        let err = transition(&conn, 404, Status::Lost).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { id: 404 }));
    }

    #[test]
    fn publish_moves_draft_to_normal() {
        let conn = test_conn();
        let mut fields = new_asset("SW-24001", "", 700_000);
        fields.status = Status::Draft;
        let draft = store::insert(&conn, &fields).unwrap();

        let published = publish(&conn, draft.id).unwrap();
        assert_eq!(published.status, Status::Normal);
    }

    #[test]
    fn apply_mirrors_the_persisted_contract() {
        let conn = test_conn();
        let mut asset =
            store::insert(&conn, &new_asset("CAR-24001", "재무팀 윤준호", 60_000_000)).unwrap();

        apply(&mut asset, Status::Sold);
        assert_eq!(asset.status, Status::Sold);
        assert_eq!(asset.owner, "");

        apply(&mut asset, Status::InRepair);
        assert_eq!(asset.owner, "");
    }
}
