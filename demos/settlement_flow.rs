//! Request-handler driven settlement flow example

use splitledger_core::{
    AddOwedRequest, CreateUserRequest, MemoryStore, PaymentRequest, RequestHandler, SettleRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("💸 Splitledger Core - Settlement Flow Example\n");

    // Drive the ledger through the request boundary, the way an external
    // caller would
    let mut handler = RequestHandler::new(MemoryStore::new());

    println!("👥 Creating users...");
    for (id, name) in [(1, "Alice"), (2, "Bob")] {
        let user = handler
            .create_user(CreateUserRequest {
                id: Some(id),
                name: Some(name.to_string()),
            })
            .await?;
        println!("  ✓ Created user: {} - {}", user.id, user.name);
    }
    println!();

    println!("🧾 Recording that Bob owes Alice 100.00...");
    handler
        .add_owed(AddOwedRequest {
            from_user_id: Some(2),
            to_user_id: Some(1),
            amount: Some(100.0),
        })
        .await?;

    println!("💳 Bob pays 30.00 back...");
    handler
        .record_payment(PaymentRequest {
            from_user_id: Some(2),
            to_user_id: Some(1),
            amount: Some(30.0),
        })
        .await?;
    for entry in handler.get_owed(1).await? {
        println!("  User {} still owes Alice {:.2}", entry.debtor_id, entry.amount);
    }
    println!();

    println!("🤝 Alice waives the rest, settling the debt...");
    handler
        .settle_payment(SettleRequest {
            from_user_id: Some(2),
            to_user_id: Some(1),
        })
        .await?;
    println!(
        "  Outstanding debts to Alice: {}",
        handler.get_owed(1).await?.len()
    );

    // Rejected input never mutates the ledger
    let rejected = handler
        .record_payment(PaymentRequest {
            from_user_id: Some(2),
            to_user_id: Some(1),
            amount: None,
        })
        .await;
    println!("  Missing-amount payment rejected: {}", rejected.is_err());

    Ok(())
}
