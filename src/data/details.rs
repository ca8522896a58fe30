//! Short one-line descriptions keyed by node label.

/// `(node label, headline)` pairs shown at the top of the detail dialog.
///
/// Labels must match the diagram node IDs exactly, including case and
/// whitespace.
pub const SHORT_DETAILS: &[(&str, &str)] = &[
	(
		"User Inputs Query",
		"Details about User Inputs Query...",
	),
	(
		"React Captures Query",
		"Details about React Captures Query...",
	),
	(
		"Axios Sends Request to Backend",
		"Details about Axios Sends Request to Backend...",
	),
	(
		"React Displays Loading State",
		"Details about React Displays Loading State...",
	),
	(
		"Express Receives Request",
		"Details about Express Receives Request...",
	),
	(
		"Token Optimization (Pre-processing)",
		"Details about Token Optimization (Pre-processing)...",
	),
	(
		"Check Cache for Similar Query",
		"Details about Check Cache for Similar Query...",
	),
	(
		"Proceed with Query Retrieval",
		"Details about Proceed with Query Retrieval...",
	),
	(
		"Initiate Parallel Query Optimization",
		"Details about Initiate Parallel Query Optimization...",
	),
	(
		"VectorDB Semantic Search (Sharded)",
		"Details about VectorDB Semantic Search (Sharded)...",
	),
	(
		"Retrieve Relevant Documents",
		"Details about Retrieve Relevant Documents...",
	),
	(
		"Pass Context to LangChain",
		"Details about Pass Context to LangChain...",
	),
	(
		"LangChain Optimizes Query",
		"Details about LangChain Optimizes Query...",
	),
	(
		"Execute Optimized Query on MySQL",
		"Details about Execute Optimized Query on MySQL...",
	),
	(
		"Process Data and Extract Insights",
		"Details about Process Data and Extract Insights...",
	),
	(
		"Format JSON Response",
		"Details about Format JSON Response...",
	),
	(
		"Store in Distributed Cache",
		"Details about Store in Distributed Cache...",
	),
	(
		"Send Data to React Frontend",
		"Details about Send Data to React Frontend...",
	),
	(
		"React Renders Results for User",
		"Details about React Renders Results for User...",
	),
	(
		"Add Backend Servers",
		"Details about Add Backend Servers...",
	),
	(
		"Horizontal Scaling of Backend Services",
		"Details about Horizontal Scaling of Backend Services...",
	),
	(
		"Use Load Balancer for Traffic Distribution",
		"Details about Use Load Balancer for Traffic Distribution...",
	),
	(
		"Use Kubernetes for Auto-Scaling",
		"Details about Use Kubernetes for Auto-Scaling...",
	),
	(
		"User Authentication",
		"Details about User Authentication (Mitigation Layer)...",
	),
	(
		"RBAC Enforcement",
		"Details about RBAC Enforcement (Mitigation Layer)...",
	),
	(
		"Data Encryption/Decryption",
		"Details about Data Encryption/Decryption (Mitigation Layer)...",
	),
	(
		"Input Validation Guardrail",
		"Details about Input Validation Guardrail (Mitigation Layer)...",
	),
	(
		"Output Sanitization",
		"Details about Output Sanitization (Mitigation Layer)...",
	),
	(
		"Centralized Logging & Monitoring",
		"Details about Centralized Logging & Monitoring (Mitigation Layer)...",
	),
	(
		"Real-Time Alerting",
		"Details about Real-Time Alerting (Mitigation Layer)...",
	),
	(
		"Configuration Versioning & Audit Trail",
		"Details about Configuration Versioning & Audit Trail (Mitigation Layer)...",
	),
	(
		"Data Governance & Compliance",
		"Details about Data Governance & Compliance (Mitigation Layer)...",
	),
	(
		"Auto-Scaling Controller",
		"Details about Auto-Scaling Controller (Mitigation Layer)...",
	),
	(
		"Cost Optimization Manager",
		"Details about Cost Optimization Manager (Mitigation Layer)...",
	),
];
