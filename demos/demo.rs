//! Quick tour of the builder: plain statements, sub-queries and counts.
//!
//! Run with `cargo run --example demo --features debug-logging` to see the
//! builder's debug output.

use queryhaus::prelude::*;

fn main() -> Result<(), QueryHausError> {
    let queryhaus = QueryHaus::default();

    let mut builder = queryhaus.get("sql")?;
    let listing = builder
        .select(["id", "email"].into())
        .from("users".into())?
        .where_(["active = 1", "verified = 1"].into())
        .order_by("created_at DESC".into())
        .limit(20u32.into())
        .offset(40u32.into())
        .build()?;
    println!("{}", listing);

    let mut totals = queryhaus.get("sql")?;
    totals
        .select(["user_id", "SUM(amount) AS total"].into())
        .from("orders".into())?
        .group_by("user_id".into());

    let ranked = builder
        .select(["users.email", "t_1.total"].into())
        .from(vec!["users".into(), TableRef::sub_query(totals.as_mut())].into())?
        .where_("users.id = t_1.user_id".into())
        .build()?;
    println!("{}", ranked);

    let count = builder
        .from("users".into())?
        .where_("active = 1".into())
        .build_count()?;
    println!("{}", count);

    // OFFSET without LIMIT is rejected and the state is kept for inspection
    builder.select("id".into()).from("users".into())?.offset(10u32.into());
    if let Err(err) = builder.build() {
        println!("rejected: {} (OFFSET fragment: {:?})", err, builder.fragment(ClauseKind::Offset));
    }

    Ok(())
}
