#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;

fn uint(width: u32) -> Type {
    Type::unsignedbv(width).unwrap()
}

fn int(value: i64) -> Expr {
    Expr::constant_int(uint(32), value).unwrap()
}

#[test]
fn first_registered_node_is_canonical() {
    let table = ExprTable::new();
    let first = int(7);
    let second = int(7);

    let canonical = table.canonicalize(first.clone());
    assert!(Expr::ptr_eq(&canonical, &first));

    let again = table.canonicalize(second.clone());
    assert!(Expr::ptr_eq(&again, &first));
    assert!(!Expr::ptr_eq(&again, &second));
    assert_eq!(table.len(), 1);
}

#[test]
fn distinct_values_get_distinct_entries() {
    let table = TypeTable::default();
    assert!(table.is_empty());
    table.canonicalize(uint(8));
    table.canonicalize(uint(16));
    table.canonicalize(uint(8));
    assert_eq!(table.len(), 2);
    assert!(table.contains(&uint(16)));
    assert!(!table.contains(&uint(32)));
}

#[test]
fn deep_clones_collapse_to_one_handle() {
    let table = ExprTable::new();
    let add = Expr::add(uint(32), int(1), int(2)).unwrap();
    let canonical = table.canonicalize(add.clone());
    let copy = table.canonicalize(add.deep_clone());
    assert!(Expr::ptr_eq(&canonical, &copy));
}

#[test]
fn shared_table_across_threads() {
    let table = SharedHashCons::<Expr>::new();
    let handles: Vec<Expr> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                scope.spawn(move || table.canonicalize(int(42)))
            })
            .collect();
        workers.into_iter().map(|worker| worker.join().unwrap()).collect()
    });

    assert_eq!(table.len(), 1);
    for handle in &handles[1..] {
        assert!(Expr::ptr_eq(&handles[0], handle));
    }
}
