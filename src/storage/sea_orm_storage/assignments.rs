//! Assignment pair generation.
//!
//! Pure functions that turn a roster into directed (evaluator, evaluatee)
//! pairs. Kept free of database access so the pairing rules are testable
//! on their own; the event storage code persists the output in bulk.

use crate::models::users::entities::UserRole;

/// Roster entry as the generator sees it
#[derive(Debug, Clone)]
pub struct RosterUser {
    pub id: i64,
    pub role: UserRole,
    pub division_id: Option<i64>,
}

/// Turns a user row into a roster entry. Rows whose stored role string is
/// not one of the recognized roles yield `None` and stay out of the
/// pairing entirely.
pub fn roster_entry(id: i64, role: &str, division_id: Option<i64>) -> Option<RosterUser> {
    let role = role.parse::<UserRole>().ok()?;
    Some(RosterUser {
        id,
        role,
        division_id,
    })
}

/// Builds the pair set for a periodic event.
///
/// Rules per evaluator role:
/// - BPI rates every other roster member.
/// - KADIV rates all BPI plus the ANGGOTA of their own division.
/// - ANGGOTA rates all BPI, their own division's KADIV and their own
///   division's ANGGOTA peers.
///
/// ADMIN users never appear on either side. A member without a division
/// matches no division-scoped rule, so they only rate (and are rated by)
/// BPI.
pub fn build_periodic_pairs(roster: &[RosterUser]) -> Vec<(i64, i64)> {
    let participants: Vec<&RosterUser> = roster
        .iter()
        .filter(|u| u.role != UserRole::Admin)
        .collect();

    let mut pairs = Vec::new();

    for evaluator in &participants {
        for target in &participants {
            if target.id == evaluator.id {
                continue;
            }

            let same_division = evaluator.division_id.is_some()
                && evaluator.division_id == target.division_id;

            let matched = match evaluator.role {
                UserRole::Bpi => true,
                UserRole::Kadiv => {
                    target.role == UserRole::Bpi
                        || (target.role == UserRole::Anggota && same_division)
                }
                UserRole::Anggota => {
                    target.role == UserRole::Bpi
                        || ((target.role == UserRole::Kadiv || target.role == UserRole::Anggota)
                            && same_division)
                }
                UserRole::Admin => false,
            };

            if matched {
                pairs.push((evaluator.id, target.id));
            }
        }
    }

    pairs
}

/// Builds the pair set for a proker event: every committee member rates
/// every other member.
pub fn build_proker_pairs(member_ids: &[i64]) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();

    for &evaluator in member_ids {
        for &target in member_ids {
            if evaluator != target {
                pairs.push((evaluator, target));
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: UserRole, division_id: Option<i64>) -> RosterUser {
        RosterUser {
            id,
            role,
            division_id,
        }
    }

    fn sample_roster() -> Vec<RosterUser> {
        vec![
            user(1, UserRole::Admin, None),
            user(2, UserRole::Bpi, None),
            user(3, UserRole::Bpi, None),
            user(4, UserRole::Kadiv, Some(10)),
            user(5, UserRole::Anggota, Some(10)),
            user(6, UserRole::Anggota, Some(10)),
            user(7, UserRole::Kadiv, Some(20)),
            user(8, UserRole::Anggota, Some(20)),
            user(9, UserRole::Anggota, None),
        ]
    }

    #[test]
    fn test_no_self_pairs() {
        let pairs = build_periodic_pairs(&sample_roster());
        assert!(pairs.iter().all(|(a, b)| a != b));
    }

    #[test]
    fn test_admin_excluded_entirely() {
        let pairs = build_periodic_pairs(&sample_roster());
        assert!(pairs.iter().all(|(a, b)| *a != 1 && *b != 1));
    }

    #[test]
    fn test_bpi_never_rates_admin() {
        let pairs = build_periodic_pairs(&sample_roster());
        assert!(!pairs.contains(&(2, 1)));
        assert!(!pairs.contains(&(3, 1)));
    }

    #[test]
    fn test_bpi_rates_everyone_else() {
        let roster = sample_roster();
        let pairs = build_periodic_pairs(&roster);
        let bpi_targets: Vec<i64> = pairs
            .iter()
            .filter(|(a, _)| *a == 2)
            .map(|(_, b)| *b)
            .collect();
        // All non-admin members except itself
        let mut expected = vec![3, 4, 5, 6, 7, 8, 9];
        let mut got = bpi_targets.clone();
        got.sort_unstable();
        expected.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_kadiv_rates_bpi_and_own_division_anggota() {
        let pairs = build_periodic_pairs(&sample_roster());
        let mut targets: Vec<i64> = pairs
            .iter()
            .filter(|(a, _)| *a == 4)
            .map(|(_, b)| *b)
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![2, 3, 5, 6]);
    }

    #[test]
    fn test_anggota_rates_bpi_kadiv_and_peers_in_division() {
        let pairs = build_periodic_pairs(&sample_roster());
        let mut targets: Vec<i64> = pairs
            .iter()
            .filter(|(a, _)| *a == 5)
            .map(|(_, b)| *b)
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![2, 3, 4, 6]);
    }

    #[test]
    fn test_divisionless_anggota_only_rates_bpi() {
        let pairs = build_periodic_pairs(&sample_roster());
        let mut targets: Vec<i64> = pairs
            .iter()
            .filter(|(a, _)| *a == 9)
            .map(|(_, b)| *b)
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![2, 3]);
    }

    #[test]
    fn test_division_containment_for_anggota_pairs() {
        let roster = sample_roster();
        let pairs = build_periodic_pairs(&roster);
        let by_id = |id: i64| roster.iter().find(|u| u.id == id).unwrap();
        for (a, b) in &pairs {
            let eva = by_id(*a);
            let tgt = by_id(*b);
            if eva.role == UserRole::Anggota && tgt.role == UserRole::Anggota {
                assert!(eva.division_id.is_some());
                assert_eq!(eva.division_id, tgt.division_id);
            }
        }
    }

    #[test]
    fn test_cross_division_anggota_never_paired() {
        let pairs = build_periodic_pairs(&sample_roster());
        assert!(!pairs.contains(&(5, 8)));
        assert!(!pairs.contains(&(8, 5)));
        assert!(!pairs.contains(&(5, 7)));
    }

    #[test]
    fn test_proker_complete_directed_graph() {
        let members = vec![1, 2, 3, 4];
        let pairs = build_proker_pairs(&members);
        assert_eq!(pairs.len(), members.len() * (members.len() - 1));
        assert!(pairs.iter().all(|(a, b)| a != b));
        assert!(pairs.contains(&(1, 4)));
        assert!(pairs.contains(&(4, 1)));
    }

    #[test]
    fn test_proker_small_committees() {
        assert!(build_proker_pairs(&[]).is_empty());
        assert!(build_proker_pairs(&[42]).is_empty());
        assert_eq!(build_proker_pairs(&[1, 2]).len(), 2);
    }

    #[test]
    fn test_unrecognized_role_is_dropped_from_roster() {
        assert!(roster_entry(3, "SEKRETARIS", Some(10)).is_none());
        assert!(roster_entry(3, "", None).is_none());
        let kept = roster_entry(2, "ANGGOTA", Some(10)).unwrap();
        assert_eq!(kept.role, UserRole::Anggota);
    }

    #[test]
    fn test_unrecognized_role_never_enters_pairing() {
        let roster: Vec<RosterUser> = [
            (2, "ANGGOTA", Some(10)),
            (3, "SEKRETARIS", Some(10)),
            (4, "ANGGOTA", Some(10)),
        ]
        .into_iter()
        .filter_map(|(id, role, div)| roster_entry(id, role, div))
        .collect();

        let pairs = build_periodic_pairs(&roster);
        assert!(pairs.iter().all(|(a, b)| *a != 3 && *b != 3));
        assert!(pairs.contains(&(2, 4)));
        assert!(pairs.contains(&(4, 2)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let roster = sample_roster();
        assert_eq!(build_periodic_pairs(&roster), build_periodic_pairs(&roster));
    }
}
