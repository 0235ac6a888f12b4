//! JSON-RPC node stand-in for unit tests.

use alloy_primitives::{Address, B256};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, Request, Respond, ResponseTemplate};

/// Replies to a JSON-RPC call, echoing the request id.
pub enum RpcReply {
	Result(Value),
	Error(i64, &'static str),
}

impl Respond for RpcReply {
	fn respond(&self, request: &Request) -> ResponseTemplate {
		let id = serde_json::from_slice::<Value>(&request.body)
			.ok()
			.and_then(|body| body.get("id").cloned())
			.unwrap_or(Value::Null);
		let body = match self {
			Self::Result(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
			Self::Error(code, message) => json!({
				"jsonrpc": "2.0",
				"id": id,
				"error": { "code": code, "message": message }
			}),
		};
		ResponseTemplate::new(200).set_body_json(body)
	}
}

/// A mock answering `rpc_method` with `reply`.
pub fn rpc(rpc_method: &str, reply: RpcReply) -> Mock {
	Mock::given(method("POST"))
		.and(body_partial_json(json!({ "method": rpc_method })))
		.respond_with(reply)
}

/// A mined EIP-1559 receipt as a node returns it.
pub fn receipt_json(
	tx_hash: B256,
	contract_address: Option<Address>,
	block_number: u64,
	success: bool,
) -> Value {
	json!({
		"type": "0x2",
		"status": if success { "0x1" } else { "0x0" },
		"cumulativeGasUsed": "0x1d4c0",
		"logs": [],
		"logsBloom": format!("0x{}", "00".repeat(256)),
		"transactionHash": tx_hash,
		"transactionIndex": "0x0",
		"blockHash": B256::repeat_byte(0x0b),
		"blockNumber": format!("{block_number:#x}"),
		"gasUsed": "0x1d4c0",
		"effectiveGasPrice": "0x3b9aca00",
		"from": Address::repeat_byte(0xf3),
		"to": null,
		"contractAddress": contract_address,
	})
}
