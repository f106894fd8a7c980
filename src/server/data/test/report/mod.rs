use crate::server::data::report::ReportRepository;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod pass_rates;
mod student_totals;
mod subject_aggregates;

/// Seeded report fixture: two fields, three subjects, four students.
///
/// Mathematics: alice (algebra 90, calculus 50), bob (algebra 70), carol (no marks)
/// Physics: dave (optics 40)
struct Seed {
    alice: i32,
    bob: i32,
    dave: i32,
}

async fn seed(db: &DatabaseConnection) -> Result<Seed, DbErr> {
    let math = factory::field::create_field_named(db, "Mathematics").await?;
    let physics = factory::field::create_field_named(db, "Physics").await?;

    let algebra = factory::subject::create_subject_named(db, math.id, "Algebra").await?;
    let calculus = factory::subject::create_subject_named(db, math.id, "Calculus").await?;
    let optics = factory::subject::create_subject_named(db, physics.id, "Optics").await?;

    let alice = factory::student::StudentFactory::new(db, math.id)
        .username("alice")
        .build()
        .await?;
    let bob = factory::student::StudentFactory::new(db, math.id)
        .username("bob")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, math.id)
        .username("carol")
        .build()
        .await?;
    let dave = factory::student::StudentFactory::new(db, physics.id)
        .username("dave")
        .build()
        .await?;

    factory::mark::create_mark_with_score(db, alice.id, algebra.id, 90).await?;
    factory::mark::create_mark_with_score(db, alice.id, calculus.id, 50).await?;
    factory::mark::create_mark_with_score(db, bob.id, algebra.id, 70).await?;
    factory::mark::create_mark_with_score(db, dave.id, optics.id, 40).await?;

    Ok(Seed {
        alice: alice.id,
        bob: bob.id,
        dave: dave.id,
    })
}
