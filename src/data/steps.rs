//! The step catalog shown in full inside the detail dialog.
//!
//! Samples are illustrative snippets, not code this crate runs.

use super::StepRecord;

/// Borrowed form of a [`StepRecord`] so the catalog can live in a `const`.
#[derive(Clone, Copy, Debug)]
pub struct StepSeed {
	/// Step name, matching a diagram node label.
	pub title: &'static str,
	/// What the step does.
	pub description: &'static str,
	/// Illustrative code text. Empty when the step has no sample.
	pub sample: &'static str,
	/// Why the step exists.
	pub rationale: &'static str,
}

impl From<&StepSeed> for StepRecord {
	fn from(seed: &StepSeed) -> Self {
		Self {
			title: seed.title.to_string(),
			description: seed.description.to_string(),
			sample: seed.sample.to_string(),
			rationale: seed.rationale.to_string(),
		}
	}
}

/// Every step, in the order the dialog lists them.
pub const STEP_CATALOG: &[StepSeed] = &[
	StepSeed {
		title: "User Inputs Query",
		description: "This is the initial stage where a user types a query into the frontend (e.g., a React app).",
		sample: r#"// QueryInput.js
import React, { useState } from 'react';

const QueryInput = ({ onSubmit }) => {
  const [query, setQuery] = useState('');
  return (
    <div>
      <input
        type="text"
        placeholder="Enter your query..."
        value={query}
        onChange={(e) => setQuery(e.target.value)}
      />
      <button onClick={() => onSubmit(query)}>Submit Query</button>
    </div>
  );
};

export default QueryInput;"#,
		rationale: "Capturing user input cleanly and efficiently ensures that the system starts with high-quality data.",
	},
	StepSeed {
		title: "React Captures Query",
		description: "Once input is received, the React component stores the query in its state and prepares to send it to the backend.",
		sample: r#"// App.js
import React from 'react';
import QueryInput from './QueryInput';

const App = () => {
  const handleQuerySubmit = (query) => {
    console.log("Captured Query:", query);
    // Pass query to backend API call
  };

  return (
    <div>
      <h1>RAG System</h1>
      <QueryInput onSubmit={handleQuerySubmit} />
    </div>
  );
};

export default App;"#,
		rationale: "Managing query state in React helps ensure the frontend has a clear, interactive process for capturing and later displaying data.",
	},
	StepSeed {
		title: "Axios Sends Request to Backend",
		description: "The frontend sends an HTTP request to the backend using Axios.",
		sample: r#"// api.js
import axios from 'axios';

export const sendQuery = async (query) => {
  try {
    const response = await axios.post('/api/query', { query });
    return response.data;
  } catch (error) {
    console.error("Error sending query:", error);
    throw error;
  }
};"#,
		rationale: "Using Axios ensures robust communication between the frontend and backend, including error handling and promise-based asynchronous requests.",
	},
	StepSeed {
		title: "React Displays Loading State",
		description: "While waiting for the backend response, a loading state or spinner is shown to enhance user experience.",
		sample: r#"// LoadingSpinner.js
import React from 'react';
import './spinner.css'; // Contains CSS for animation

const LoadingSpinner = () => (
  <div className="spinner">
    <div className="loader"></div>
    <p>Loading...</p>
  </div>
);

export default LoadingSpinner;"#,
		rationale: "A clear loading state improves user engagement and indicates that the system is processing the request.",
	},
	StepSeed {
		title: "Express Receives Request",
		description: "The Express server accepts incoming HTTP requests.",
		sample: r#"// server.js
const express = require("express");
const app = express();
app.use(express.json());

app.post("/api/query", (req, res) => {
  const query = req.body.query;
  console.log("Received Query:", query);
  // Further processing…
  res.json({ message: "Query received" });
});

app.listen(3000, () => console.log("Server running on port 3000"));"#,
		rationale: "A reliable Express endpoint is critical for processing user queries in a Node.js environment.",
	},
	StepSeed {
		title: "Token Optimization (Pre-processing)",
		description: "Before processing, the system tokenizes and optimizes the query to reduce costs.",
		sample: r#"// tokenizer.js
const natural = require('natural');
const tokenizer = new natural.WordTokenizer();

const optimizeTokens = (query) => {
  const tokens = tokenizer.tokenize(query);
  // Example: Remove stop words (you can use a stop-word library)
  const optimized = tokens.filter(token => !['the', 'a', 'an'].includes(token.toLowerCase()));
  return optimized;
};

module.exports = optimizeTokens;"#,
		rationale: "Optimizing tokens ensures lower processing cost and faster response time when interacting with large language models.",
	},
	StepSeed {
		title: "Check Cache for Similar Query",
		description: "Before doing heavy processing, check Redis or similar caching systems for a cached response.",
		sample: r#"// cache.js
const redis = require("redis");
const client = redis.createClient();

client.on("error", (err) => console.error("Redis error:", err));

const checkCache = (query, callback) => {
  client.get(query, (err, data) => {
    if (err) throw err;
    callback(data);
  });
};

module.exports = checkCache;"#,
		rationale: "Caching frequently asked queries reduces redundant computation and speeds up overall response time.",
	},
	StepSeed {
		title: "Proceed with Query Retrieval",
		description: "If no cached response is found, the system proceeds to retrieve context using a vector database.",
		sample: r#"// retrieval.js
const retrieveContext = async (queryVector) => {
  // Example function: Query your vector DB (e.g., Pinecone, Milvus)
  const results = await vectorDb.search(queryVector);
  return results;
};

module.exports = retrieveContext;"#,
		rationale: "Retrieving relevant documents from a vector database ensures the AI model has the necessary context for generating accurate responses.",
	},
	StepSeed {
		title: "Initiate Parallel Query Optimization",
		description: "Run multiple retrieval queries in parallel to reduce wait time.",
		sample: r#"// parallelOptimization.js
const optimizeQueries = async (queries) => {
  const results = await Promise.all(queries.map(q => retrieveContext(q)));
  return results;
};

module.exports = optimizeQueries;"#,
		rationale: "Parallel processing increases efficiency and helps in dealing with large data sets quickly.",
	},
	StepSeed {
		title: "VectorDB Semantic Search (Sharded)",
		description: "Use a sharded vector database to perform semantic search across documents.",
		sample: r#"// vectorSearch.js
const performSemanticSearch = async (queryVector) => {
  // Assume vectorDb is a sharded vector database instance
  const searchResults = await vectorDb.semanticSearch(queryVector);
  return searchResults;
};

module.exports = performSemanticSearch;"#,
		rationale: "Sharding increases search speed and scalability by distributing the load across multiple nodes.",
	},
	StepSeed {
		title: "Retrieve Relevant Documents",
		description: "Extract and rank documents that are most relevant to the query.",
		sample: r#"// documentRetrieval.js
const retrieveDocuments = async (searchResults) => {
  // Process and rank documents here
  const rankedDocuments = searchResults.sort((a, b) => b.score - a.score);
  return rankedDocuments;
};

module.exports = retrieveDocuments;"#,
		rationale: "Accurate retrieval and ranking are crucial for providing contextually correct information to the AI model.",
	},
	StepSeed {
		title: "Pass Context to LangChain",
		description: "The retrieved documents are then passed as context to the LangChain processing framework.",
		sample: r#"// langchainIntegration.js
const { OpenAI } = require("langchain/llms/openai");

const passContextToLangChain = async (context, query) => {
  const llm = new OpenAI({ temperature: 0 });
  const prompt = `${query}\n\nContext:\n${context.join("\n")}`;
  const response = await llm.generate(prompt);
  return response;
};

module.exports = passContextToLangChain;"#,
		rationale: "Providing enriched context to the language model increases the accuracy of the generated response.",
	},
	StepSeed {
		title: "LangChain Optimizes Query",
		description: "LangChain further refines the query and context before generating the final answer.",
		sample: r#"// Same module can handle query optimization by adjusting the prompt based on retrieved context.
// See langchainIntegration.js for an example."#,
		rationale: "Optimization at this level ensures the AI model is not overwhelmed by extraneous information and can focus on the key elements of the query.",
	},
	StepSeed {
		title: "Execute Optimized Query on MySQL",
		description: "Execute an SQL query on MySQL to extract structured data if needed.",
		sample: r#"// mysqlQuery.js
const mysql = require('mysql');
const connection = mysql.createConnection({ host: 'localhost',

connection.connect();

const executeQuery = (sql) => {
  return new Promise((resolve, reject) => {
    connection.query(sql, (error, results) => {
      if (error) reject(error);
      resolve(results);
    });
  });
}

module.exports = executeQuery;"#,
		rationale: "Integrating MySQL allows the system to mix unstructured retrieval with structured data queries, increasing the versatility of the final output.",
	},
	StepSeed {
		title: "Process Data and Extract Insights",
		description: "After retrieving data, the system processes it to extract useful insights for the final answer.",
		sample: r#"// dataProcessing.js
const processData = (data) => {
  // Process data and extract insights. For instance:
  return data.map(item => ({
    id: item.id,
    summary: item.description.slice(0, 100) // simple example summary
  }));
};

module.exports = processData;"#,
		rationale: "Efficient data processing is essential to convert raw data into actionable insights for the AI model.",
	},
	StepSeed {
		title: "Format JSON Response",
		description: "The processed data is formatted into a JSON structure that is sent back to the frontend.",
		sample: r#"// In your Express route after processing:
res.json({ status: "success", data: formattedData });"#,
		rationale: "A standardized JSON response ensures that the frontend can easily parse and render the final output.",
	},
	StepSeed {
		title: "Store in Distributed Cache",
		description: "Caching the final response reduces load on the system for repeated queries.",
		sample: r#"// cacheResponse.js
const cacheResponse = (query, response) => {
  client.setex(query, 3600, JSON.stringify(response)); // Cache for 1 hour
};

module.exports = cacheResponse;"#,
		rationale: "Caching improves performance and scalability by reducing the need for repeated processing.",
	},
	StepSeed {
		title: "Send Data to React Frontend",
		description: "The backend sends the final JSON response back to the frontend.",
		sample: r#"// Handled in your Express route using res.json() as shown above."#,
		rationale: "Clear and reliable data transmission ensures the frontend displays accurate results promptly.",
	},
	StepSeed {
		title: "React Renders Results for User",
		description: "The frontend uses the response data to render results dynamically.",
		sample: r#"// ResultDisplay.js
import React from 'react';

const ResultDisplay = ({ data }) => (
  <div>
    <h2>Results:</h2>
    <pre>{JSON.stringify(data, null, 2)}</pre>
  </div>
);

export default ResultDisplay;"#,
		rationale: "Presenting the results in a user-friendly format is crucial for user satisfaction.",
	},
	StepSeed {
		title: "Add Backend Servers",
		description: "To handle increased traffic, additional backend servers are added.",
		sample: r#"// Conceptual, using PM2 for clustering:
# Start multiple instances using PM2
pm2 start server.js -i max"#,
		rationale: "Horizontal scaling via multiple server instances increases resilience and performance.",
	},
	StepSeed {
		title: "Horizontal Scaling of Backend Services",
		description: "Distribute traffic across multiple backend servers.",
		sample: r#"// Nginx configuration snippet
upstream backend {
    server backend1.example.com;
    server backend2.example.com;
}
server {
    listen 80;
    location / {
        proxy_pass http://backend;
    }
}"#,
		rationale: "Balancing load among servers helps maintain system performance during peak usage.",
	},
	StepSeed {
		title: "Use Load Balancer for Traffic Distribution",
		description: "A load balancer ensures that no single server is overwhelmed by requests.",
		sample: "",
		rationale: "Load balancing is essential for high availability and smooth scaling.",
	},
	StepSeed {
		title: "Use Kubernetes for Auto-Scaling",
		description: "Kubernetes manages containers and auto-scales the services based on load.",
		sample: r#"// Kubernetes Deployment Snippet
apiVersion: apps/v1
kind: Deployment
metadata:
  name: backend-deployment
spec:
  replicas: 3
  selector:
    matchLabels:
      app: backend
  template:
    metadata:
      labels:
        app: backend
    spec:
      containers:
      - name: backend
        image: your-backend-image
        ports:
        - containerPort: 3000"#,
		rationale: "Kubernetes simplifies deployment and scaling, making it easier to manage high-demand systems.",
	},
	StepSeed {
		title: "User Authentication",
		description: "Verify that the requester is authorized to access the system.",
		sample: r#"// authMiddleware.js
const jwt = require('jsonwebtoken');

const authenticateUser = (req, res, next) => {
  const token = req.headers.authorization?.split(" ")[1];
  if (!token) return res.status(401).json({ message: "No token provided" });

  jwt.verify(token, 'yourSecretKey', (err, decoded) => {
    if (err) return res.status(401).json({ message: "Invalid token" });
    req.user = decoded;
    next();
  });
}

module.exports = authenticateUser;"#,
		rationale: "Authentication protects the system from unauthorized access and is a cornerstone of security in enterprise environments.",
	},
	StepSeed {
		title: "RBAC Enforcement",
		description: "Implement Role-Based Access Control to restrict functionalities based on user roles.",
		sample: r#"// rbacMiddleware.js
const roles = {
  admin: ['read', 'write', 'delete'],
  user: ['read']
};

const checkPermission = (requiredPermission) => (req, res, next) => {
  const userRole = req.user.role;
  if (roles[userRole]?.includes(requiredPermission)) {
    next();
  } else {
    res.status(403).json({ message: "Forbidden: Insufficient permissions" });
  }
}

module.exports = checkPermission;"#,
		rationale: "RBAC ensures that sensitive operations are only performed by authorized personnel.",
	},
	StepSeed {
		title: "Data Encryption/Decryption",
		description: "Encrypt sensitive data before storing it and decrypt on retrieval.",
		sample: r#"// encryption.js
const crypto = require('crypto');
const algorithm = 'aes-256-cbc';

const encrypt = (text) => {
  let cipher = crypto.createCipheriv(algorithm, Buffer.from(key), iv);
  let encrypted = cipher.update(text);
  encrypted = Buffer.concat([encrypted, cipher.final()]);
  return iv.toString('hex') + ':' + encrypted.toString('hex');
}

const decrypt = (text) => {
  let textParts = text.split(':');
  let iv = Buffer.from(textParts.shift(), 'hex');
  let encryptedText = Buffer.from(textParts.join(':'), 'hex');
  let decipher = crypto.createDecipheriv(algorithm, Buffer.from(key), iv);
  let decrypted = decipher.update(encryptedText);
  decrypted = Buffer.concat([decrypted, decipher.final()]);
  return decrypted.toString();
}

module.exports = { encrypt, decrypt };"#,
		rationale: "Encryption protects data privacy and is essential for regulatory compliance.",
	},
	StepSeed {
		title: "Input Validation Guardrail",
		description: "Validate and sanitize user input to prevent injection attacks.",
		sample: r#"// validationMiddleware.js
const { body, validationResult } = require('express-validator');

const validateQuery = [
  body('query')
    .trim()
    .escape()
    .isLength({ min: 1 })
    .withMessage('Query cannot be empty'),
  (req, res, next) => {
    const errors = validationResult(req);
    if (!errors.isEmpty()) {
      return res.status(400).json({ errors: errors.array() });
    }
    next();
  }
];

module.exports = validateQuery;"#,
		rationale: "Sanitizing input prevents harmful data from affecting system behavior.",
	},
	StepSeed {
		title: "Output Sanitization",
		description: "Ensure generated responses do not contain harmful or sensitive content.",
		sample: r#"// outputSanitizer.js
const sanitizeOutput = (output) => {
  // For example, remove any sensitive keywords
  return output.replace(/(password|secret)/gi, '****');
}

module.exports = sanitizeOutput;"#,
		rationale: "Output sanitization safeguards users and the system from displaying unintended information.",
	},
	StepSeed {
		title: "Centralized Logging & Monitoring",
		description: "Implement centralized logging to capture system events for debugging and monitoring.",
		sample: r#"// logger.js
const { createLogger, format, transports } = require('winston');

const logger = createLogger({
  level: 'info',
  format: format.combine(
    format.timestamp(),
    format.json()
  ),
  transports: [
    new transports.File({ filename: 'error.log', level: 'error' }),
    new transports.File({ filename: 'combined.log' })
  ]
});

if (process.env.NODE_ENV !== 'production') {
  logger.add(new transports.Console({
    format: format.simple()
  }));
}

module.exports = logger;"#,
		rationale: "Centralized logging allows for proactive issue detection and efficient debugging.",
	},
	StepSeed {
		title: "Real-Time Alerting",
		description: "Set up alerts to notify administrators of critical issues.",
		sample: r#"// alertService.js
const sendAlert = (message) => {
  // Example: Integrate with an SMS/email alert service
  console.log("ALERT:", message);
  // Implementation might use Twilio, SendGrid, etc.
}

module.exports = sendAlert;"#,
		rationale: "Real-time alerting ensures that critical issues are addressed immediately, minimizing downtime.",
	},
	StepSeed {
		title: "Configuration Versioning & Audit Trail",
		description: "Track changes to configuration and data to support audits and rollbacks.",
		sample: r#"// configManager.js
const fs = require('fs');
const configPath = './config.json';

const loadConfig = () => JSON.parse(fs.readFileSync(configPath, 'utf8'));

const saveConfig = (config) => {
  fs.writeFileSync
  (configPath, JSON.stringify(config, null, 2));
};

module.exports = { loadConfig, saveConfig };"#,
		rationale: "Versioning and audit trails provide transparency and help with regulatory compliance.",
	},
	StepSeed {
		title: "Data Governance & Compliance",
		description: "Enforce policies for data usage, retention, and access.",
		sample: r#"// governanceMiddleware.js
const checkCompliance = (req, res, next) => {
  // Example check: Ensure data usage policies are met
  if (!req.user.agreedToPolicy) {
    return res.status(403).json({ message: "Data policy not accepted" });
  }
  next();
}

module.exports = checkCompliance;"#,
		rationale: "Data governance ensures that sensitive information is handled in accordance with legal and regulatory requirements.",
	},
	StepSeed {
		title: "Auto-Scaling Controller",
		description: "Manage system resources by dynamically adjusting the number of server instances.",
		sample: r#"// autoScalingController.js (pseudo-code)
const monitorLoad = () => {
  // Monitor CPU usage, memory, etc.
  // Trigger scaling actions if thresholds are exceeded
  console.log("Monitoring load...");
  // Integrate with Kubernetes API for real auto-scaling
}

setInterval(monitorLoad, 60000);"#,
		rationale: "Dynamic scaling helps the system respond to fluctuating loads, ensuring consistent performance.",
	},
	StepSeed {
		title: "Cost Optimization Manager",
		description: "Monitor resource usage and adjust parameters to minimize operational cost.",
		sample: r#"// costManager.js
const trackCosts = () => {
  // Example: Log resource usage and calculate cost estimates
  console.log("Tracking resource usage and estimating cost...");
}

setInterval(trackCosts, 300000); // every 5 minutes"#,
		rationale: "Cost optimization is critical in large-scale deployments to maintain an efficient and affordable system.",
	},
];
