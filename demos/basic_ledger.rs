//! Basic ledger usage example

use splitledger_core::{Ledger, MemoryStore, SplitShare};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("💸 Splitledger Core - Basic Ledger Example\n");

    // Create a new ledger with in-memory storage
    let mut ledger = Ledger::new(MemoryStore::new());

    // 1. Register the participants
    println!("👥 Registering users...");
    for (id, name) in [(1, "Alice"), (2, "Bob"), (3, "Charlie")] {
        let user = ledger.register_user(id, name.to_string()).await?;
        println!("  ✓ Registered user: {} - {}", user.id, user.name);
    }
    println!();

    // 2. Alice pays for dinner, split equally
    println!("🧾 Alice pays 90.00 for dinner, split equally...");
    ledger.split_equal(1, 90.0).await?;
    for entry in ledger.get_owed_to(1).await? {
        println!("  User {} owes Alice {:.2}", entry.debtor_id, entry.amount);
    }
    println!();

    // 3. Bob pays for tickets, split 25/75 between Alice and Charlie
    println!("🧾 Bob pays 120.00 for tickets, 25% Alice / 75% Charlie...");
    ledger
        .split_arbitrary(
            2,
            120.0,
            &[SplitShare::new(1, 25.0), SplitShare::new(3, 75.0)],
        )
        .await?;
    for entry in ledger.get_owed_to(2).await? {
        println!("  User {} owes Bob {:.2}", entry.debtor_id, entry.amount);
    }
    println!();

    // 4. Charlie pays part of his dinner share back
    println!("💳 Charlie pays Alice 20.00...");
    ledger.record_payment(3, 1, 20.0).await?;
    for entry in ledger.get_owed_to(1).await? {
        println!("  User {} owes Alice {:.2}", entry.debtor_id, entry.amount);
    }
    println!();

    // 5. Totals per creditor
    println!("💰 Outstanding totals:");
    for (id, name) in [(1, "Alice"), (2, "Bob"), (3, "Charlie")] {
        println!(
            "  {}: {:.2}",
            name,
            ledger.total_owed_to(id).await?
        );
    }

    Ok(())
}
