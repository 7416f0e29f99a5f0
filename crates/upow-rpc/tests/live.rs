//! Live-node integration tests.
//!
//! Run with: cargo test -p upow-rpc --test live -- --ignored
//!
//! These hit the public node and depend on network state, so they only
//! assert shape, not values.

use upow_rpc::{AddressInfoQuery, NodeClient};

fn node() -> NodeClient {
    let url = std::env::var("UPOW_NODE_URL")
        .unwrap_or_else(|_| upow_rpc::DEFAULT_NODE_URL.to_string());
    NodeClient::new(&url).expect("client")
}

#[tokio::test]
#[ignore]
async fn test_inode_list_is_bounded() {
    let inodes = node().get_inode_addresses().await.expect("dobby_info");
    assert!(inodes.len() <= upow_types::constants::MAX_INODES);
}

#[tokio::test]
#[ignore]
async fn test_address_info_sections_follow_flags() {
    let node = node();
    let inodes = node.get_inode_addresses().await.expect("dobby_info");
    let Some(address) = inodes.first() else {
        return;
    };
    let info = node
        .get_address_info(
            address,
            AddressInfoQuery {
                stake_outputs: true,
                address_state: true,
                ..Default::default()
            },
        )
        .await
        .expect("get_address_info");
    assert!(info.is_inode);
}
