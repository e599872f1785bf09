//! Users and classes - statement rendering walkthrough
//!
//! Builds the statements of a small school database, prints the SQL, and
//! decodes a canned result set back into rows.
//!
//! Run with: cargo run --example users

use sqlgen_core::builder::{OrderDirection, avg, count, star};
use sqlgen_core::reader::{FromSql, MemoryResultReader, ResultReader, unpack};
use sqlgen_core::{Delete, Insert, Select, Statement, Table, Update, ValueKind};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug)]
struct User {
    name: String,
    age: i64,
    addr: Option<String>,
}

impl FromSql for User {
    fn from_sql<R: ResultReader + ?Sized>(reader: &mut R) -> sqlgen_core::Result<Self> {
        Ok(Self {
            name: String::from_sql(reader)?,
            age: i64::from_sql(reader)?,
            addr: Option::<String>::from_sql(reader)?,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let users = Table::builder("Users")
        .column("name", ValueKind::String)
        .column("age", ValueKind::Int)
        .column("addr", ValueKind::String)
        .column("score", ValueKind::Int)
        .build();
    let class = Table::builder("Class")
        .column("name", ValueKind::String)
        .column("age", ValueKind::Int)
        .build();

    let statements = [
        Insert::new()
            .insert_into(&users)
            .values([
                users["name"].assign("lis"),
                users["age"].assign(12),
                users["addr"].assign("aaaa"),
                users["score"].assign(90),
            ])
            .values([
                users["name"].assign("mid"),
                users["age"].assign(18),
                users["addr"].assign(None::<&str>),
                users["score"].assign(75),
            ])
            .to_sql()?,
        Insert::new()
            .insert_into(&class)
            .values([class["name"].assign("English"), class["age"].assign(12)])
            .values([class["name"].assign("Math"), class["age"].assign(18)])
            .to_sql()?,
        Update::new()
            .update(&users)
            .set([users["score"].assign(&users["score"] + 5)])
            .where_clause(users["age"].lt(15))
            .to_sql()?,
        Select::new()
            .select([users["name"].expr(), class["name"].expr()])
            .from(users.join(&class, class["age"].eq(&users["age"])))
            .where_clause(users["score"].gt_eq(80))
            .to_sql()?,
        Select::new()
            .select([users["age"].expr(), count(star()), avg(&users["score"])])
            .from(&users)
            .group_by(&users["age"])
            .having(count(&users["age"]).gt(1))
            .to_sql()?,
        Select::new()
            .select([&users["name"], &users["age"], &users["addr"]])
            .from(&users)
            .order_by(&users["age"], OrderDirection::Desc)
            .limit(10)
            .to_sql()?,
        Delete::new()
            .from(&class)
            .where_clause(class["name"].eq("English"))
            .to_sql()?,
    ];

    for sql in &statements {
        println!("{sql}");
    }

    let mut reader = MemoryResultReader::new(
        3,
        vec![
            vec![Some("mid".into()), Some("18".into()), None],
            vec![Some("lis".into()), Some("12".into()), Some("aaaa".into())],
        ],
    );
    let rows: Vec<User> = unpack(&mut reader)?;
    for user in &rows {
        info!(name = %user.name, age = user.age, addr = ?user.addr, "decoded row");
    }

    Ok(())
}
