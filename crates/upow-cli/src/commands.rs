//! CLI command implementations.

use upow_crypto::PrivateKey;
use upow_rpc::NodeClient;
use upow_tx::Transaction;
use upow_types::Amount;
use upow_wallet::{KeyStore, Wallet};

use crate::AppContext;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

fn wallet(ctx: &AppContext) -> std::result::Result<Wallet, Box<dyn std::error::Error>> {
    Ok(Wallet::new(NodeClient::new(&ctx.node_url)?))
}

fn selected_key(ctx: &AppContext) -> std::result::Result<PrivateKey, Box<dyn std::error::Error>> {
    let store = KeyStore::load(&ctx.keys_path)?;
    if store.is_empty() {
        return Err("no keys available; run create-wallet first".into());
    }
    Ok(store.get(ctx.key_index)?.signing_key()?)
}

async fn broadcast(ctx: &AppContext, tx: &Transaction) -> Result {
    if wallet(ctx)?.push(tx).await? {
        println!("Transaction pushed. Transaction hash: {}", tx.hash());
        Ok(())
    } else {
        Err("transaction has not been pushed".into())
    }
}

pub fn create_wallet(ctx: &AppContext) -> Result {
    let mut store = KeyStore::load(&ctx.keys_path)?;
    let pair = store.generate()?;
    println!("Private key: {}", pair.private_key);
    println!("Address (Public Key): {}", pair.public_key);
    Ok(())
}

pub async fn balance(ctx: &AppContext) -> Result {
    let key = selected_key(ctx)?;
    let balance = wallet(ctx)?.balance(&key.address()).await?;
    println!("Address: {}", key.address());
    println!("Balance: {}", balance.total);
    println!("Staked:  {}", balance.stake);
    Ok(())
}

pub async fn send(
    ctx: &AppContext,
    address: &str,
    amount: &str,
    message: Option<&str>,
) -> Result {
    let key = selected_key(ctx)?;
    let amount = Amount::parse(amount)?;
    let message = message.map(|m| m.as_bytes().to_vec());
    let tx = wallet(ctx)?
        .transfer(&key, address, amount, message, None)
        .await?;
    broadcast(ctx, &tx).await
}

pub async fn send_many(ctx: &AppContext, addresses: &[String], amounts: &[String]) -> Result {
    let key = selected_key(ctx)?;
    let amounts = amounts
        .iter()
        .map(|a| Amount::parse(a))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let tx = wallet(ctx)?
        .transfer_many(&key, addresses, &amounts, None, None)
        .await?;
    broadcast(ctx, &tx).await
}

pub async fn stake(ctx: &AppContext, amount: &str) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?
        .stake(&key, Amount::parse(amount)?, None)
        .await?;
    broadcast(ctx, &tx).await
}

pub async fn unstake(ctx: &AppContext) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?.unstake(&key).await?;
    broadcast(ctx, &tx).await
}

pub async fn register_inode(ctx: &AppContext) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?.register_inode(&key).await?;
    broadcast(ctx, &tx).await
}

pub async fn deregister_inode(ctx: &AppContext) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?.deregister_inode(&key).await?;
    broadcast(ctx, &tx).await
}

pub async fn register_validator(ctx: &AppContext) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?.register_validator(&key).await?;
    broadcast(ctx, &tx).await
}

pub async fn vote(ctx: &AppContext, range: &str, address: &str) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?
        .vote(&key, Amount::parse(range)?, address)
        .await?;
    broadcast(ctx, &tx).await
}

pub async fn revoke(ctx: &AppContext, address: &str) -> Result {
    let key = selected_key(ctx)?;
    let tx = wallet(ctx)?.revoke(&key, address).await?;
    broadcast(ctx, &tx).await
}
