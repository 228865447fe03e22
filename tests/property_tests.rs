//! Property-based tests for directory invariants
//!
//! Random operation sequences are applied both to a Directory and to a
//! plain BTreeMap model. After every step the directory must agree with
//! the model and keep both orderings sorted, unique and in sync.

use std::collections::BTreeMap;

use agenda::{Directory, FullName, Rank};
use proptest::prelude::*;

// Small alphabets so keys collide often
fn word() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,2}"
}

#[derive(Debug, Clone)]
enum Op {
    Add(String, String, String, u32),
    Delete(String, String),
    DeleteByEmail(String),
    ChangeFullName(String, String, String),
    ChangeEmail(String, String, String),
    SetSalary(String, String, u32),
    SetSalaryByEmail(String, u32),
}

fn op() -> impl Strategy<Value = Op> {
    let salary = 0u32..5;
    prop_oneof![
        3 => (word(), word(), word(), salary.clone()).prop_map(|(n, s, e, p)| Op::Add(n, s, e, p)),
        1 => (word(), word()).prop_map(|(n, s)| Op::Delete(n, s)),
        1 => word().prop_map(Op::DeleteByEmail),
        1 => (word(), word(), word()).prop_map(|(e, n, s)| Op::ChangeFullName(e, n, s)),
        1 => (word(), word(), word()).prop_map(|(n, s, e)| Op::ChangeEmail(n, s, e)),
        1 => (word(), word(), salary.clone()).prop_map(|(n, s, p)| Op::SetSalary(n, s, p)),
        1 => (word(), salary).prop_map(|(e, p)| Op::SetSalaryByEmail(e, p)),
    ]
}

/// Reference model: by-name key -> (email, salary)
type Model = BTreeMap<FullName, (String, u32)>;

fn email_owner(model: &Model, email: &str) -> Option<FullName> {
    model
        .iter()
        .find(|(_, (e, _))| e == email)
        .map(|(k, _)| k.clone())
}

/// Apply `op` to the model, returning whether it should succeed.
///
/// Renaming onto a record's own key counts as a duplicate here too.
fn apply_model(model: &mut Model, op: &Op) -> bool {
    match op {
        Op::Add(n, s, e, p) => {
            let key = FullName::new(n, s);
            if model.contains_key(&key) || email_owner(model, e).is_some() {
                return false;
            }
            model.insert(key, (e.clone(), *p));
            true
        }
        Op::Delete(n, s) => model.remove(&FullName::new(n, s)).is_some(),
        Op::DeleteByEmail(e) => match email_owner(model, e) {
            Some(key) => model.remove(&key).is_some(),
            None => false,
        },
        Op::ChangeFullName(e, n, s) => {
            let new_key = FullName::new(n, s);
            match email_owner(model, e) {
                Some(old) if !model.contains_key(&new_key) => {
                    let value = model.remove(&old).unwrap();
                    model.insert(new_key, value);
                    true
                }
                _ => false,
            }
        }
        Op::ChangeEmail(n, s, e) => {
            let key = FullName::new(n, s);
            if !model.contains_key(&key) || email_owner(model, e).is_some() {
                return false;
            }
            model.get_mut(&key).unwrap().0 = e.clone();
            true
        }
        Op::SetSalary(n, s, p) => match model.get_mut(&FullName::new(n, s)) {
            Some(entry) => {
                entry.1 = *p;
                true
            }
            None => false,
        },
        Op::SetSalaryByEmail(e, p) => match email_owner(model, e) {
            Some(key) => {
                model.get_mut(&key).unwrap().1 = *p;
                true
            }
            None => false,
        },
    }
}

fn apply_directory(dir: &mut Directory, op: &Op) -> bool {
    match op {
        Op::Add(n, s, e, p) => dir.add(n, s, e, *p).is_ok(),
        Op::Delete(n, s) => dir.delete(n, s).is_ok(),
        Op::DeleteByEmail(e) => dir.delete_by_email(e).is_ok(),
        Op::ChangeFullName(e, n, s) => dir.change_full_name(e, n, s).is_ok(),
        Op::ChangeEmail(n, s, e) => dir.change_email(n, s, e).is_ok(),
        Op::SetSalary(n, s, p) => dir.set_salary(n, s, *p).is_ok(),
        Op::SetSalaryByEmail(e, p) => dir.set_salary_by_email(e, *p).is_ok(),
    }
}

proptest! {
    #[test]
    fn prop_directory_matches_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut dir = Directory::new();
        let mut model = Model::new();

        for op in &ops {
            let before: Vec<_> = dir.iter().cloned().collect();
            let expected = apply_model(&mut model, op);
            let actual = apply_directory(&mut dir, op);

            prop_assert_eq!(actual, expected, "op {:?}", op);
            if !actual {
                let after: Vec<_> = dir.iter().cloned().collect();
                prop_assert_eq!(before, after, "failed op {:?} changed the directory", op);
            }
            prop_assert_eq!(dir.check_invariants(), Ok(()));
            prop_assert_eq!(dir.len(), model.len());
        }

        // Traversal visits the model's keys in order
        let walked: Vec<FullName> = dir.iter().map(|r| r.full_name()).collect();
        let expected: Vec<FullName> = model.keys().cloned().collect();
        prop_assert_eq!(walked, expected);

        for (key, (email, salary)) in &model {
            prop_assert_eq!(dir.salary(&key.name, &key.surname), Ok(*salary));
            prop_assert_eq!(dir.salary_by_email(email), Ok(*salary));
        }
    }

    #[test]
    fn prop_first_next_walk_is_strictly_increasing(
        people in prop::collection::vec((word(), word(), word()), 0..40)
    ) {
        let mut dir = Directory::new();
        for (n, s, e) in &people {
            let _ = dir.add(n, s, e, 0);
        }

        let mut seen = Vec::new();
        if let Ok(mut current) = dir.first() {
            loop {
                seen.push(current.clone());
                match dir.next(&current.name, &current.surname) {
                    Ok(next) => current = next,
                    Err(_) => break,
                }
            }
        }

        prop_assert_eq!(seen.len(), dir.len());
        for pair in seen.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn prop_rank_counts_lower_and_equal(salaries in prop::collection::vec(0u32..6, 1..30)) {
        let mut dir = Directory::new();
        for (i, salary) in salaries.iter().enumerate() {
            dir.add("N", &format!("S{:03}", i), &format!("e{:03}", i), *salary).unwrap();
        }

        for (i, salary) in salaries.iter().enumerate() {
            let below = salaries.iter().filter(|s| *s < salary).count();
            let equal = salaries.iter().filter(|s| *s == salary).count();
            let expected = Rank { min: below, max: below + equal - 1 };

            prop_assert_eq!(dir.rank("N", &format!("S{:03}", i)), Ok(expected));
            prop_assert_eq!(dir.rank_by_email(&format!("e{:03}", i)), Ok(expected));
        }
    }
}
