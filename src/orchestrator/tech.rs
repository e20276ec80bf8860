//! # Catálogo de Tecnologias Nomeadas
//!
//! Respostas com profundidade para as tecnologias mais perguntadas, antes
//! que a pontuação genérica de tópicos dilua a resposta.
//!
//! Cada [`TechProfile`] tem palavras-chave de disparo, um padrão "how" e um
//! padrão "why" opcionais com respostas direcionadas, e um pool de
//! descrições gerais (sorteadas pelo [`Chooser`]). A primeira entrada do
//! catálogo cujas palavras-chave ocorrem na frase responde; a emoção é
//! sempre `enthusiastic` com o glifo da entrada.
//!
//! Em perguntas de continuação ("how does it work?"), [`TechCatalog::subject_of`]
//! recupera a tecnologia que o usuário citou por último.

use regex::Regex;

use crate::core::chooser::{pick, Chooser};
use crate::core::emotion::{Emotion, EmotionKind};
use crate::core::knowledge_base::{contains_keywords, KnowledgeBase, TopicQuery};
use crate::core::message::{Message, Reply, Sender};
use crate::nlu::reference::extract_topics_from_context;
use crate::nlu::synonyms::SynonymTable;

const HOW_GENERAL: &str = r"how\s+(?:does|do|can|should)";
const HOW_WORK: &str = r"how\s+(?:does|do|work)";
const WHY_CHOOSE: &str = r"why\s+(?:is|use|choose)";
const WHY_LEARN: &str = r"why\s+(?:is|use|learn)";
const WHY_USE: &str = r"why\s+(?:is|use)";

/// Entrada estática do catálogo.
#[derive(Clone, Copy, Debug)]
pub struct TechProfile {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub how: Option<(&'static str, &'static str)>,
    pub why: Option<(&'static str, &'static str)>,
    /// Descrições gerais; uma é sorteada a cada resposta.
    pub general: &'static [&'static str],
    pub glyph: &'static str,
}

pub const TECH_PROFILES: &[TechProfile] = &[
    TechProfile {
        name: "React",
        keywords: &["react", "reactjs"],
        how: Some((
            HOW_GENERAL,
            "React works by using a Virtual DOM to efficiently update the UI. Components re-render when state changes, and React calculates the minimal changes needed. Use hooks like useState for state and useEffect for side effects. ⚛️",
        )),
        why: Some((
            WHY_CHOOSE,
            "React is popular because it's component-based, has a Virtual DOM for performance, large ecosystem, and is used by companies like Facebook, Netflix, and Airbnb. ⚛️",
        )),
        general: &["React is a JavaScript library for building user interfaces, created by Facebook in 2013. ⚛️\n\n**Key Features:**\n• Component-based architecture\n• Virtual DOM for efficient updates\n• Hooks for state management (useState, useEffect)\n• Large ecosystem (React Router, Redux)\n• Used by Netflix, Airbnb, Instagram\n\nIt's declarative, efficient, and flexible."],
        glyph: "⚛️",
    },
    TechProfile {
        name: "JavaScript",
        keywords: &["javascript", "js"],
        how: Some((
            HOW_GENERAL,
            "JavaScript runs in browsers and on servers (Node.js). It's event-driven and asynchronous. Use functions, objects, and modern features like async/await for asynchronous operations. 🌐",
        )),
        why: Some((
            WHY_LEARN,
            "JavaScript is essential for web development - it's the only language that runs natively in browsers. It's also used for backend (Node.js), mobile apps (React Native), and has a massive ecosystem (npm). 🌐",
        )),
        general: &["JavaScript is a programming language created in 1995, used for web development. 🌐\n\n**Key Features:**\n• Runs in browsers and on servers (Node.js)\n• Dynamic typing, first-class functions\n• Modern features: ES6+, async/await, modules\n• Frameworks: React, Vue, Angular\n• Package manager: npm (largest ecosystem)\n\nIt powers interactive websites, mobile apps, and server-side applications."],
        glyph: "🌐",
    },
    TechProfile {
        name: "Python",
        keywords: &["python"],
        how: Some((
            HOW_GENERAL,
            "Python is interpreted - code runs directly without compilation. Use indentation for blocks, and leverage its extensive standard library and packages from PyPI. 🐍",
        )),
        why: Some((
            WHY_LEARN,
            "Python is easy to learn, versatile (web, data science, AI, automation), has a large community, and is used by Google, Netflix, and NASA. Great for beginners and experts. 🐍",
        )),
        general: &[
            "Python is a high-level, interpreted programming language known for its simplicity and readability! 🐍 It's widely used for:\n• Web development (Django, Flask)\n• Data science and AI (NumPy, Pandas, TensorFlow)\n• Automation and scripting\n• Scientific computing\n• Game development\n\nIt's perfect for beginners and experts alike!",
            "Python 🐍 is one of the most popular programming languages! It's loved for:\n• Easy-to-read syntax\n• Versatile applications\n• Strong community support\n• Extensive libraries\n• Great for learning programming\n\nWant to know more about any specific aspect?",
            "Python is amazing! 🐍 It's used everywhere:\n• Backend web development\n• Machine learning and AI\n• Data analysis\n• Automation\n• Scientific research\n\nIt's beginner-friendly yet powerful enough for complex projects!",
        ],
        glyph: "🐍",
    },
    TechProfile {
        name: "ChatGPT",
        keywords: &["chatgpt", "gpt", "openai"],
        how: Some((
            HOW_WORK,
            "ChatGPT uses transformer neural networks trained on vast text data. It processes input as tokens, understands context, and generates responses using patterns learned during training. 🤖",
        )),
        why: Some((
            WHY_USE,
            "ChatGPT is useful for answering questions, writing code, creative content, problem-solving, and maintaining conversations. It's accessible and versatile. 🤖",
        )),
        general: &["ChatGPT is an AI language model by OpenAI, based on GPT architecture. 🤖\n\n**Capabilities:**\n• Answer questions and provide information\n• Write code and creative content\n• Problem-solving and analysis\n• Translation and summarization\n\n**Limitations:** Can hallucinate, has a knowledge cutoff, and should be fact-checked for critical work."],
        glyph: "🤖",
    },
    TechProfile {
        name: "Claude",
        keywords: &["claude", "anthropic"],
        how: Some((
            HOW_WORK,
            "Claude uses Constitutional AI training to be helpful, harmless, and honest. It processes long context (up to 200K tokens), analyzes complex topics, and provides thoughtful responses. 🧠",
        )),
        why: Some((
            WHY_USE,
            "Claude excels at long-form content, code analysis, complex reasoning, and ethical AI practices. It's known for thoughtful, nuanced responses and strong safety focus. 🧠",
        )),
        general: &["Claude is an AI assistant by Anthropic, focused on safety and helpfulness. 🧠\n\n**Key Features:**\n• Long context windows (200K tokens)\n• Advanced reasoning and analysis\n• Strong code proficiency\n• Ethical AI alignment\n\n**Use Cases:** Technical writing, code review, research, and analysis."],
        glyph: "🧠",
    },
    TechProfile {
        name: "GitHub Copilot",
        keywords: &["copilot", "github copilot"],
        how: Some((
            HOW_WORK,
            "GitHub Copilot uses OpenAI's Codex model to analyze your code context and suggest completions as you type. It works as an extension in your code editor. 💻",
        )),
        why: Some((
            WHY_USE,
            "GitHub Copilot saves time on boilerplate, suggests idiomatic snippets, and helps you explore unfamiliar APIs without leaving the editor. 💻",
        )),
        general: &["GitHub Copilot is an AI code completion tool that suggests code as you type. 💻\n\n**Features:**\n• Code suggestions and completions\n• Generates functions and code blocks\n• Supports multiple programming languages\n• Integrates with code editors\n\nIt's like having an AI pair programmer in your editor."],
        glyph: "💻",
    },
    TechProfile {
        name: "TensorFlow",
        keywords: &["tensorflow"],
        how: Some((
            HOW_WORK,
            "TensorFlow builds computational graphs for neural networks. It uses tensors (multi-dimensional arrays), automatic differentiation for gradients, and supports distributed training across GPUs/TPUs. 🔥",
        )),
        why: Some((
            WHY_USE,
            "TensorFlow is production-ready with strong deployment tools, mobile/edge support (TensorFlow Lite), and is great for large-scale ML systems. Used by Airbnb, Uber, Dropbox. 🔥",
        )),
        general: &["TensorFlow is Google's open-source ML framework (2015). 🔥\n\n**Features:**\n• Build and train neural networks\n• Keras integration for easy model building\n• Distributed training (GPUs/TPUs)\n• TensorFlow Lite (mobile), TensorFlow.js (browser)\n• TensorBoard for visualization\n\n**Use Cases:** Computer vision, NLP, recommendation systems, time series."],
        glyph: "🔥",
    },
    TechProfile {
        name: "PyTorch",
        keywords: &["pytorch"],
        how: Some((
            HOW_WORK,
            "PyTorch uses dynamic computation graphs that build on-the-fly. It's Pythonic (like NumPy with GPU), uses autograd for automatic differentiation, and executes code immediately. 🚀",
        )),
        why: Some((
            WHY_USE,
            "PyTorch is preferred for research because it's flexible, easy to debug (use Python debuggers), intuitive (Pythonic), and allows fast iteration. Used by Tesla, Uber, research institutions. 🚀",
        )),
        general: &["PyTorch is Meta's deep learning framework (2016), popular for research. 🚀\n\n**Features:**\n• Dynamic computation graphs\n• Pythonic design (like NumPy with GPU)\n• Easy debugging with Python tools\n• Strong research focus\n• TorchScript for production\n\n**Use Cases:** Research, computer vision, NLP, reinforcement learning."],
        glyph: "🚀",
    },
    TechProfile {
        name: "AWS",
        keywords: &["aws", "amazon web services"],
        how: Some((
            HOW_WORK,
            "AWS rents out compute, storage, and managed services from data centers grouped into regions and availability zones. You provision resources through the console, CLI, or infrastructure-as-code, and pay only for what you use. ☁️",
        )),
        why: Some((
            WHY_USE,
            "AWS has the broadest catalog of services, a global footprint, and a mature ecosystem of tools and certifications. It scales from hobby projects to the largest enterprises. ☁️",
        )),
        general: &["AWS (Amazon Web Services) is Amazon's cloud computing platform, launched in 2006! ☁️ It's the world's largest and most widely adopted cloud platform.\n\n**Core Services:**\n• Compute: EC2, Lambda (serverless), ECS/EKS (containers)\n• Storage: S3, EBS, EFS\n• Databases: RDS, DynamoDB, Aurora\n• Networking: VPC, CloudFront, Route 53\n\nPay-as-you-go pricing with a generous free tier."],
        glyph: "☁️",
    },
    TechProfile {
        name: "Azure",
        keywords: &["azure", "microsoft azure"],
        how: None,
        why: None,
        general: &["Microsoft Azure is a cloud computing platform launched in 2010! ☁️ It's the second-largest cloud provider globally.\n\n**Core Services:**\n• Compute: Virtual Machines, App Service, Functions, AKS\n• Storage: Blob Storage, Files, Data Lake\n• Databases: SQL Database, Cosmos DB\n• AI: Azure OpenAI, Cognitive Services\n\nIt integrates tightly with Microsoft 365, Active Directory, and Visual Studio."],
        glyph: "☁️",
    },
    TechProfile {
        name: "Google Cloud",
        keywords: &["gcp", "google cloud", "google cloud platform"],
        how: None,
        why: None,
        general: &["Google Cloud Platform (GCP) is Google's cloud computing service! ☁️ It excels at:\n• Data analytics and BigQuery\n• Machine learning and AI\n• Kubernetes and containers\n• Serverless computing\n• Integration with Google services\n\nIt's known for its data and AI capabilities!"],
        glyph: "☁️",
    },
    TechProfile {
        name: "Docker",
        keywords: &["docker", "docker container"],
        how: Some((
            HOW_WORK,
            "Docker builds an image from a Dockerfile, layer by layer, and runs it as an isolated container that shares the host kernel. The same image runs identically on a laptop, a CI runner, or a server. 🐳",
        )),
        why: Some((
            WHY_USE,
            "Containers start in seconds, use far less memory than virtual machines, and end the \"works on my machine\" problem. 🐳",
        )),
        general: &["Docker is an open-source containerization platform that packages applications and their dependencies into lightweight, portable containers! 🐳 Released in 2013.\n\n**Key Concepts:**\n• Images: read-only templates built from a Dockerfile\n• Containers: running instances of images\n• Registries: Docker Hub for sharing images\n• Compose: multi-container apps in one file\n\nContainers share the host kernel, so they start in seconds. Used by Netflix, Spotify, PayPal and millions of developers worldwide!"],
        glyph: "🐳",
    },
    TechProfile {
        name: "Kubernetes",
        keywords: &["kubernetes", "k8s"],
        how: Some((
            HOW_WORK,
            "Kubernetes runs a control plane that constantly compares the desired state you declare in manifests with the actual state of the cluster, then schedules, restarts, or scales pods until they match. ⚙️",
        )),
        why: None,
        general: &["Kubernetes (K8s) is an open-source container orchestration platform originally designed by Google, now maintained by the Cloud Native Computing Foundation! ⚙️\n\n**What It Does:**\nAutomates the deployment, scaling, and management of containerized applications across clusters of machines.\n\n**Core Concepts:**\n• Pods: smallest deployable unit\n• Deployments: declarative updates and rollbacks\n• Services: stable networking for pods\n• Ingress: HTTP routing into the cluster"],
        glyph: "⚙️",
    },
    TechProfile {
        name: "MySQL",
        keywords: &["mysql"],
        how: None,
        why: None,
        general: &["MySQL is one of the most popular open-source relational databases! 🗄️ It's known for:\n• Fast and reliable performance\n• Easy to use and set up\n• Widely supported by hosting providers\n• Great for web applications\n• Strong community support\n\nIt's perfect for many web projects!"],
        glyph: "🗄️",
    },
    TechProfile {
        name: "PostgreSQL",
        keywords: &["postgresql", "postgres"],
        how: None,
        why: Some((
            WHY_USE,
            "PostgreSQL combines strict SQL compliance and ACID transactions with powerful extensions like PostGIS and JSONB, so one database covers relational and document workloads. 🗄️",
        )),
        general: &["PostgreSQL is a powerful, open-source object-relational database system, first released in 1996! 🗄️ It's known for its advanced features and SQL compliance.\n\n**Core Features:**\n• ACID compliance with strong data integrity\n• Advanced SQL: window functions, CTEs, recursive queries\n• Extensible: custom types, functions, and extensions\n• JSONB for document-style data"],
        glyph: "🗄️",
    },
    TechProfile {
        name: "MongoDB",
        keywords: &["mongodb"],
        how: None,
        why: None,
        general: &["MongoDB is a popular NoSQL document database that stores data in flexible, JSON-like documents! 🗄️ Released in 2009.\n\n**What Makes It Different:**\nUnlike relational databases, MongoDB is schema-less, so each document can have different fields.\n\n**Core Concepts:**\n• Documents and collections\n• Rich query language and aggregation pipeline\n• Replica sets for high availability\n• Sharding for horizontal scale"],
        glyph: "🗄️",
    },
    TechProfile {
        name: "Node.js",
        keywords: &["nodejs", "node.js", "node"],
        how: Some((
            HOW_WORK,
            "Node.js runs JavaScript on Chrome's V8 engine with a single-threaded event loop. I/O is non-blocking: callbacks, promises, and async/await resume when work completes, so one process can serve many connections. 🟢",
        )),
        why: None,
        general: &["Node.js is a JavaScript runtime built on Chrome's V8 JavaScript engine, created by Ryan Dahl in 2009! 🟢 It allows JavaScript to run on the server-side.\n\n**Core Features:**\n• Event-driven, non-blocking I/O\n• Single-threaded event loop\n• NPM, the world's largest package ecosystem\n• Cross-platform\n\n**Popular Frameworks:** Express.js, Fastify, Nest.js, Koa.js."],
        glyph: "🟢",
    },
    TechProfile {
        name: "TypeScript",
        keywords: &["typescript", "ts"],
        how: None,
        why: Some((
            WHY_USE,
            "TypeScript catches type errors at compile time, powers better autocomplete and refactoring, and makes large codebases easier to maintain. 📘",
        )),
        general: &["TypeScript is a statically-typed superset of JavaScript developed by Microsoft, first released in 2012! 📘 It adds type checking to JavaScript.\n\n**Key Features:**\n• Static typing with type inference\n• Interfaces and generics\n• Union and intersection types\n• Compiles to plain JavaScript\n\nIt's the standard for large-scale JavaScript projects!"],
        glyph: "📘",
    },
    TechProfile {
        name: "Java",
        keywords: &["java"],
        how: None,
        why: None,
        general: &["Java is a high-level, object-oriented programming language created by Sun Microsystems (now Oracle) in 1995! ☕ It's one of the most widely-used programming languages.\n\n**Core Philosophy:**\n\"Write Once, Run Anywhere\" - Java compiles to bytecode that runs on any JVM.\n\n**Used For:** Enterprise backends (Spring), Android apps, big data (Hadoop, Kafka)."],
        glyph: "☕",
    },
    TechProfile {
        name: "Vue",
        keywords: &["vue", "vuejs"],
        how: None,
        why: None,
        general: &["Vue.js is a progressive JavaScript framework! 💚 It's loved for:\n• Easy to learn and use\n• Flexible and incrementally adoptable\n• Great documentation\n• Excellent performance\n• Growing ecosystem\n\nPerfect for both small projects and large applications!"],
        glyph: "💚",
    },
    TechProfile {
        name: "Angular",
        keywords: &["angular"],
        how: None,
        why: None,
        general: &["Angular is a TypeScript-based web framework! 🔴 It provides:\n• Full-featured framework (not just a library)\n• Two-way data binding\n• Dependency injection\n• Strong typing with TypeScript\n• Great for enterprise applications\n\nMaintained by Google!"],
        glyph: "🔴",
    },
];

/// Entrada do catálogo com os padrões já compilados.
#[derive(Clone, Debug)]
struct TechHandler {
    profile: TechProfile,
    how: Option<Regex>,
    why: Option<Regex>,
}

impl TechHandler {
    fn answer(&self, input: &str, chooser: &mut dyn Chooser) -> &'static str {
        let targeted = |pattern: &Option<Regex>, answer: Option<(&str, &'static str)>| {
            pattern
                .as_ref()
                .zip(answer)
                .filter(|(re, _)| re.is_match(input))
                .map(|(_, (_, text))| text)
        };
        match targeted(&self.how, self.profile.how).or_else(|| targeted(&self.why, self.profile.why)) {
            Some(text) => text,
            None => *pick(self.profile.general, chooser),
        }
    }
}

/// Catálogo ordenado de tecnologias nomeadas.
#[derive(Clone, Debug)]
pub struct TechCatalog {
    handlers: Vec<TechHandler>,
}

impl TechCatalog {
    pub fn builtin() -> Result<Self, regex::Error> {
        Self::new(TECH_PROFILES)
    }

    pub fn new(profiles: &[TechProfile]) -> Result<Self, regex::Error> {
        let compile = |entry: Option<(&str, &str)>| {
            entry
                .map(|(pattern, _)| Regex::new(&format!("(?i){pattern}")))
                .transpose()
        };
        let handlers = profiles
            .iter()
            .map(|profile| -> Result<TechHandler, regex::Error> {
                Ok(TechHandler {
                    profile: *profile,
                    how: compile(profile.how)?,
                    why: compile(profile.why)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { handlers })
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Primeira tecnologia citada na frase, se houver.
    pub fn find(&self, query: &TopicQuery) -> Option<&TechProfile> {
        self.handler(query).map(|h| &h.profile)
    }

    /// Resposta da primeira tecnologia citada na frase.
    pub fn respond(&self, input: &str, query: &TopicQuery, chooser: &mut dyn Chooser) -> Option<Reply> {
        let handler = self.handler(query)?;
        tracing::debug!(tech = handler.profile.name, "Tecnologia nomeada");
        Some(Reply::new(
            handler.answer(input, chooser),
            Emotion::new(EmotionKind::Enthusiastic, handler.profile.glyph),
        ))
    }

    /// Resposta de uma tecnologia já conhecida, direcionada pela frase atual.
    pub fn answer(&self, profile: &TechProfile, input: &str, chooser: &mut dyn Chooser) -> &'static str {
        match self.handlers.iter().find(|h| h.profile.name == profile.name) {
            Some(handler) => handler.answer(input, chooser),
            None => *pick(profile.general, chooser),
        }
    }

    /// Tecnologia em discussão: a citada na mensagem mais recente do
    /// usuário que cita algum assunto.
    ///
    /// Uma mensagem mais nova que só cita um tópico da base encerra a
    /// busca sem tecnologia. As respostas do bot não contam.
    pub fn subject_of(
        &self,
        history: &[Message],
        kb: &KnowledgeBase,
        synonyms: &SynonymTable,
    ) -> Option<&TechProfile> {
        for message in history.iter().rev().filter(|m| m.sender == Sender::User) {
            let query = TopicQuery::new(&message.text, synonyms);
            if let Some(profile) = self.find(&query) {
                return Some(profile);
            }
            if !extract_topics_from_context(&[message.text.as_str()], kb).is_empty() {
                return None;
            }
        }
        None
    }

    fn handler(&self, query: &TopicQuery) -> Option<&TechHandler> {
        self.handlers
            .iter()
            .find(|h| contains_keywords(query, h.profile.keywords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chooser::FixedChooser;

    fn respond(input: &str) -> Option<Reply> {
        respond_with(input, 0)
    }

    fn respond_with(input: &str, choice: usize) -> Option<Reply> {
        let catalog = TechCatalog::builtin().unwrap();
        catalog.respond(
            input,
            &TopicQuery::new(input, &SynonymTable::builtin()),
            &mut FixedChooser(choice),
        )
    }

    fn profile(name: &str) -> &'static TechProfile {
        TECH_PROFILES.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn catalog_compiles_in_order() {
        let catalog = TechCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 21);
        assert_eq!(TECH_PROFILES[0].name, "React");
        assert_eq!(TECH_PROFILES[20].name, "Angular");
        assert!(TECH_PROFILES.iter().all(|p| !p.general.is_empty()));
    }

    #[test]
    fn general_description_by_default() {
        let reply = respond("What is React?").unwrap();
        assert!(reply.text.starts_with("React is a JavaScript library for building user interfaces"));
        assert_eq!(reply.emotion.kind, EmotionKind::Enthusiastic);
        assert_eq!(reply.emotion.glyph, "⚛️");
    }

    #[test]
    fn how_and_why_get_targeted_answers() {
        assert!(respond("How does React render?").unwrap().text.starts_with("React works by"));
        assert!(respond("why use react").unwrap().text.starts_with("React is popular"));
        assert!(respond("why learn python?").unwrap().text.starts_with("Python is easy"));
    }

    #[test]
    fn python_description_is_drawn_from_its_pool() {
        let python = profile("Python");
        assert_eq!(python.general.len(), 3);
        for (i, expected) in python.general.iter().enumerate() {
            let reply = respond_with("tell me about python", i).unwrap();
            assert_eq!(reply.text, *expected);
            assert_eq!(reply.emotion.glyph, "🐍");
        }
    }

    #[test]
    fn earlier_entries_win() {
        // "javascript" também contém "java": JavaScript vem antes no catálogo
        assert_eq!(respond("tell me about javascript").unwrap().emotion.glyph, "🌐");
        assert_eq!(respond("tell me about java").unwrap().emotion.glyph, "☕");
    }

    #[test]
    fn short_keywords_need_whole_words() {
        assert!(respond("those parts").is_none());
        assert_eq!(respond("is ts worth it").unwrap().emotion.glyph, "📘");
    }

    // ─── Assunto da conversa ─────────────────────────────────

    #[test]
    fn answer_targets_a_known_profile() {
        let catalog = TechCatalog::builtin().unwrap();
        let docker = profile("Docker");
        assert!(catalog
            .answer(docker, "How does it work?", &mut FixedChooser(0))
            .starts_with("Docker builds an image"));
        assert_eq!(catalog.answer(docker, "tell me more", &mut FixedChooser(0)), docker.general[0]);
    }

    #[test]
    fn subject_comes_from_the_latest_user_mention() {
        let catalog = TechCatalog::builtin().unwrap();
        let kb = KnowledgeBase::builtin();
        let synonyms = SynonymTable::builtin();
        let subject = |history: &[Message]| catalog.subject_of(history, &kb, &synonyms).map(|p| p.name);

        let history = vec![
            Message::user("Tell me about Docker", None),
            Message::assistant(
                "Kubernetes and AWS pair well with it.",
                Emotion::new(EmotionKind::Enthusiastic, "🐳"),
            ),
        ];
        assert_eq!(subject(&history), Some("Docker"));

        let mut later = history.clone();
        later.push(Message::user("what about mysql", None));
        assert_eq!(subject(&later), Some("MySQL"));

        later.push(Message::user("I love history", None));
        assert_eq!(subject(&later), None);

        assert_eq!(subject(&[Message::user("hello", None)]), None);
    }
}
