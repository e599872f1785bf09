//! End-to-end rendering of the four statement builders.

mod common;

use common::{class, unqualified, users};
use sqlgen_core::ast::BinaryOp;
use sqlgen_core::builder::{OrderDirection, count, lit, max, null, star};
use sqlgen_core::{
    Delete, Insert, RenderConfig, Select, SqlGenError, Statement, Update, ValueKind,
    ViolationKind,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_select_scenario() {
    let users = users();
    let sql = Select::new()
        .select([&users["name"], &users["age"]])
        .from(&users)
        .where_clause(users["age"].gt_eq(18))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SELECT name,age FROM Users WHERE age >= 18");
}

#[test]
fn test_insert_scenario() {
    let users = users();
    let sql = Insert::new()
        .insert_into(&users)
        .values([users["name"].assign("a"), users["age"].assign(1)])
        .values([users["name"].assign("b"), users["age"].assign(2)])
        .to_sql()
        .unwrap();
    assert_eq!(sql, "INSERT INTO Users(name,age) VALUES ('a',1),('b',2)");
}

#[test]
fn test_join_scenario() {
    let (users, class) = (users(), class());
    let sql = Select::new()
        .select([&users["name"]])
        .from(users.join(&class, class["age"].eq(&users["age"])))
        .where_clause(users["age"].eq(18))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT Users.name FROM Users JOIN Class ON Class.age=Users.age WHERE Users.age=18"
    );
}

#[test]
fn test_order_and_group_are_exclusive() {
    let users = users();
    let err = Select::new()
        .from(&users)
        .group_by(&users["age"])
        .order_by(&users["name"], OrderDirection::Desc)
        .to_sql()
        .unwrap_err();
    assert_eq!(err, SqlGenError::OrderAndGroup);
    assert_eq!(err.kind(), ViolationKind::MalformedClause);
}

#[test]
fn test_join_qualifies_every_clause() {
    let (users, class) = (users(), class());
    let sql = Select::new()
        .select([max(&users["score"]), users["name"].expr()])
        .from(users.join(&class, users["age"].eq(&class["age"])))
        .where_clause(class["name"].eq("math").and(users["score"].gt(10)))
        .group_by(&users["name"])
        .having(count(&users["tag"]).eq("x"))
        .to_sql()
        .unwrap();

    assert!(unqualified(&sql, &["name", "age", "score", "tag"]).is_empty(), "{sql}");
    assert_eq!(
        sql,
        "SELECT MAX(Users.score),Users.name FROM Users JOIN Class ON Users.age=Class.age \
         WHERE (Class.name='math') AND (Users.score > 10) GROUP BY Users.name \
         HAVING COUNT(Users.tag)='x'"
    );
}

#[test]
fn test_single_table_is_unqualified() {
    let users = users();
    let sql = Select::new()
        .select([&users["name"], &users["score"]])
        .from(&users)
        .where_clause(users["addr"].like("%street%"))
        .order_by(&users["score"], OrderDirection::Desc)
        .limit(10)
        .offset(20)
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT name,score FROM Users WHERE addr LIKE '%street%' ORDER BY score DESC LIMIT 10 OFFSET 20"
    );
    assert!(!sql.contains("Users."));
}

#[test]
fn test_row_width_is_structural() {
    let users = users();
    let err = Insert::new()
        .insert_into(&users)
        .values([users["name"].assign("a"), users["age"].assign(1)])
        .values([users["name"].assign("c")])
        .to_sql()
        .unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Structural);
}

#[test]
fn test_type_mismatch_is_not_rendered() {
    let users = users();
    let err = Select::new()
        .from(&users)
        .where_clause(users["age"].eq("x"))
        .to_sql()
        .unwrap_err();
    assert_eq!(
        err,
        SqlGenError::TypeMismatch {
            op: BinaryOp::Eq,
            left: ValueKind::Int,
            right: ValueKind::String,
        }
    );
    assert_eq!(err.kind(), ViolationKind::TypeMismatch);
}

#[test]
fn test_null_comparisons_are_mismatches() {
    let users = users();
    for predicate in [users["age"].eq(null()), users["age"].gt(null())] {
        let err = Select::new()
            .from(&users)
            .where_clause(predicate)
            .to_sql()
            .unwrap_err();
        assert!(
            matches!(
                err,
                SqlGenError::TypeMismatch {
                    left: ValueKind::Int,
                    right: ValueKind::Null,
                    ..
                }
            ),
            "{err}"
        );
    }
}

#[test]
fn test_null_assignments_are_accepted() {
    let users = users();
    let update = Update::new()
        .update(&users)
        .set([users["addr"].assign(null()), users["score"].assign(None::<i64>)])
        .where_clause(users["name"].eq("mid"));
    assert_eq!(
        update.to_sql().unwrap(),
        "UPDATE Users SET addr=NULL,score=NULL WHERE name='mid'"
    );

    let insert = Insert::new()
        .insert_into(&users)
        .values([users["name"].assign("mid"), users["addr"].assign(null())]);
    assert_eq!(
        insert.to_sql().unwrap(),
        "INSERT INTO Users(name,addr) VALUES ('mid',NULL)"
    );
}

#[test]
fn test_non_finite_float_is_malformed() {
    let users = users();
    let err = Select::new()
        .select([lit(f64::NEG_INFINITY)])
        .from(&users)
        .to_sql()
        .unwrap_err();
    assert_eq!(err.kind(), ViolationKind::MalformedClause);
}

#[test]
fn test_having_count_of_column_passes_strict() {
    let users = users();
    let sql = Select::new()
        .select([users["age"].expr(), count(&users["age"])])
        .from(&users)
        .group_by(&users["age"])
        .having(count(&users["age"]).gt(1))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT age,COUNT(age) FROM Users GROUP BY age HAVING COUNT(age) > 1"
    );
}

#[test]
fn test_string_literals_are_not_escaped() {
    let users = users();
    let sql = Update::new()
        .update(&users)
        .set([users["name"].assign("it's")])
        .to_sql()
        .unwrap();
    assert_eq!(sql, "UPDATE Users SET name='it's'");
}

#[test]
fn test_update_and_delete_session() {
    let (users, class) = (users(), class());

    let update = Update::new()
        .update(&users)
        .set([users["age"].assign(33), users["name"].assign("lis")])
        .where_clause(users["name"].eq("lis"));
    assert_eq!(
        update.to_sql().unwrap(),
        "UPDATE Users SET age=33,name='lis' WHERE name='lis'"
    );

    let delete = Delete::new()
        .from(&class)
        .where_clause(class["name"].eq("English").or(class["age"].lt(7)));
    assert_eq!(
        delete.to_sql().unwrap(),
        "DELETE FROM Class WHERE (name='English') OR (age < 7)"
    );
}

#[test]
fn test_render_is_repeatable() {
    let users = users();
    let select = Select::new().select([count(star())]).from(&users);
    let first = select.to_sql().unwrap();
    assert_eq!(first, "SELECT COUNT(*) FROM Users");
    assert_eq!(select.to_sql().unwrap(), first);
}

#[test]
fn test_warn_policy_renders_and_logs() {
    init_tracing();
    let users = users();
    let select = Select::new()
        .from(&users)
        .where_clause(users["age"].eq("x"))
        .limit(-1);
    assert!(select.to_sql().is_err());
    assert_eq!(
        select.to_sql_with(&RenderConfig::warn()).unwrap(),
        "SELECT * FROM Users WHERE age='x' LIMIT -1"
    );
}

#[test]
fn test_where_without_from_is_dropped() {
    init_tracing();
    let users = users();
    let sql = Select::new()
        .select([lit(1)])
        .where_clause(users["age"].eq(1))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SELECT 1");
}
