//! Conteúdo embutido da base de conhecimento: 14 tópicos em ordem fixa.
//!
//! A ordem importa: é a ordem de iteração do scorer (empates ficam com o
//! primeiro tópico) e do varrimento de fallback.

pub(crate) struct TopicData {
    pub name: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
}

pub(crate) const BUILTIN_TOPICS: &[TopicData] = &[
    TopicData {
        name: "programming",
        label: "Programming",
        keywords: &[
            "javascript", "js", "react", "node", "nodejs", "java", "c++", "c#", "html", "css", "sql",
            "database", "api", "json", "xml", "git", "github", "coding", "programming", "developer",
            "software", "typescript", "ts", "vue", "angular", "svelte", "nextjs", "nuxt",
        ],
        responses: &[
            "Programming is writing code to create software, websites, and apps. 💻\n\n**Popular Languages:**\n• Web: JavaScript, TypeScript\n• Backend: Python, Java, Node.js\n• Mobile: Swift, Kotlin, React Native\n• Data: Python, R, SQL\n\n**Key Concepts:** Variables, functions, control structures, OOP, algorithms, APIs.\n\nWhat specific language or topic interests you?",
            "Programming enables building software, automating tasks, and solving problems with code. 🚀\n\n**Why Learn:** Problem-solving skills, creativity, career opportunities, automation.\n\n**Getting Started:** Choose a language (Python for beginners), learn basics, build projects, practice regularly.\n\nWhat would you like to learn?",
            "Programming languages translate ideas into computer instructions. 🔧\n\n**Categories:** High-level (Python, JS), low-level (C), compiled (Java, C++), interpreted (Python, JS).\n\n**Paradigms:** Object-oriented, functional, procedural.\n\nWhich topic interests you?",
        ],
    },
    TopicData {
        name: "ai_tools",
        label: "AI Tools",
        keywords: &[
            "chatgpt", "openai", "gpt", "claude", "anthropic", "gemini", "google ai", "bard",
            "copilot", "github copilot", "midjourney", "dalle", "stable diffusion", "hugging face",
            "transformers", "langchain", "llama", "mistral", "perplexity", "jupyter", "colab",
            "kaggle",
        ],
        responses: &[
            "AI tools are so cool! 🤖✨ ChatGPT, Claude, Gemini, Copilot - there are tons of them now! They help with coding, writing, making images, all sorts of stuff. Which one are you curious about?",
            "The AI world is wild right now! 🎨 You've got GPT and Claude for chat, DALL-E and Midjourney for images, Copilot for coding... it's crazy how much they can do! What do you want to know?",
            "AI tools are everywhere now! 🚀 ChatGPT for conversations, GitHub Copilot for coding, Hugging Face for models... there's something for almost everything. Which one interests you?",
        ],
    },
    TopicData {
        name: "ml_frameworks",
        label: "ML Frameworks",
        keywords: &[
            "tensorflow", "pytorch", "keras", "scikit-learn", "sklearn", "pandas", "numpy",
            "matplotlib", "seaborn", "xgboost", "lightgbm", "opencv", "spacy", "nltk",
            "transformers", "huggingface",
        ],
        responses: &[
            "Machine learning frameworks are powerful! TensorFlow and PyTorch are the most popular deep learning frameworks. Scikit-learn is great for traditional ML, while Pandas and NumPy handle data manipulation. What would you like to learn about? 📊",
            "ML frameworks make building AI models easier! TensorFlow for production, PyTorch for research, and Scikit-learn for traditional algorithms. Each has its strengths! Which one interests you? 🧠",
            "Data science and ML tools like Pandas, NumPy, Matplotlib, and Scikit-learn form the foundation of machine learning. Combined with TensorFlow or PyTorch, you can build amazing AI applications! 💡",
        ],
    },
    TopicData {
        name: "cloud_platforms",
        label: "Cloud Platforms",
        keywords: &[
            "aws", "amazon web services", "azure", "microsoft azure", "gcp", "google cloud",
            "cloudflare", "vercel", "netlify", "heroku", "digitalocean", "linode", "s3", "ec2",
            "lambda", "kubernetes", "k8s",
        ],
        responses: &[
            "Cloud platforms are essential for modern applications! AWS, Azure, and Google Cloud are the big three. They offer computing, storage, databases, and AI services. Which platform are you curious about? ☁️",
            "Cloud computing has transformed how we deploy applications! AWS leads the market, Azure integrates well with Microsoft tools, and GCP excels in data analytics. What would you like to know? 🌐",
            "From serverless functions (AWS Lambda) to container orchestration (Kubernetes), cloud platforms offer incredible scalability and flexibility. Vercel and Netlify make deployment super easy too! 🚀",
        ],
    },
    TopicData {
        name: "dev_tools",
        label: "Developer Tools",
        keywords: &[
            "docker", "kubernetes", "k8s", "jenkins", "ci/cd", "github actions", "gitlab",
            "terraform", "ansible", "vagrant", "vscode", "visual studio code", "intellij",
            "webstorm", "postman", "insomnia",
        ],
        responses: &[
            "Development tools make our lives easier! Docker for containerization, Kubernetes for orchestration, and CI/CD tools like GitHub Actions automate deployments. What tool are you interested in? 🛠️",
            "Modern dev tools are amazing! Docker containers, Kubernetes clusters, and CI/CD pipelines streamline development. VS Code is a fantastic editor, and Postman helps with API testing. Which one? 🔧",
            "DevOps tools like Docker, Kubernetes, Terraform, and Jenkins are essential for modern software development. They help with containerization, orchestration, and automation! 💻",
        ],
    },
    TopicData {
        name: "databases",
        label: "Databases",
        keywords: &[
            "mysql", "postgresql", "postgres", "mongodb", "redis", "elasticsearch", "cassandra",
            "sqlite", "oracle", "dynamodb", "firebase", "supabase", "prisma", "sql", "nosql",
        ],
        responses: &[
            "Databases are the backbone of applications! SQL databases like PostgreSQL and MySQL are reliable, while NoSQL databases like MongoDB offer flexibility. Redis is great for caching! What database interests you? 🗄️",
            "Choosing the right database matters! PostgreSQL for complex queries, MongoDB for flexible schemas, Redis for speed, and Elasticsearch for search. Each has its use case! 📊",
            "Modern databases offer amazing features! PostgreSQL for relational data, MongoDB for documents, Redis for caching, and Firebase for real-time apps. What would you like to know? 💾",
        ],
    },
    TopicData {
        name: "technology",
        label: "Technology",
        keywords: &[
            "ai", "artificial intelligence", "machine learning", "ml", "deep learning",
            "neural network", "blockchain", "cloud", "internet", "web", "tech", "technology", "iot",
            "internet of things", "ar", "augmented reality", "vr", "virtual reality", "metaverse",
        ],
        responses: &[
            "Technology is transforming our world! 🤖\n\n**AI:** Machine learning, deep learning, NLP, computer vision.\n**Emerging Tech:** Blockchain, IoT, AR/VR, cloud computing, 5G, quantum computing.\n**Impact:** Healthcare, education, business, entertainment.\n\nWhat technology interests you?",
            "Technology shapes modern life. 🌐\n\n**Major Trends:** AI/ML, cloud computing (AWS, Azure, GCP), blockchain, IoT, AR/VR, edge computing, cybersecurity.\n\n**Components:** Hardware, software, networks, data, algorithms.\n\nWhat tech topic interests you?",
            "Tech innovation is accelerating! 💡\n\n**Current:** Generative AI, cloud-native, DevOps, microservices, serverless, containers (Docker/Kubernetes).\n\n**Key Tech:** Programming languages, frameworks, databases, tools (Git, Docker, CI/CD).\n\n**Careers:** Software dev, data science, cloud engineering, cybersecurity, DevOps.\n\nWhich area interests you?",
        ],
    },
    TopicData {
        name: "science",
        label: "Science",
        keywords: &[
            "science", "scientific", "physics", "chemistry", "biology", "math", "mathematics",
            "space", "universe", "planet", "earth", "star", "galaxy", "atom", "molecule",
            "experiment", "research", "discovery",
        ],
        responses: &[
            "Science is the systematic study of nature through observation and experimentation. 🔬\n\n**Branches:** Physics (matter, energy), Chemistry (atoms, reactions), Biology (life, cells), Mathematics (numbers, patterns), Astronomy (space), Earth Science (geology, weather).\n\n**Scientific Method:** Observation → Hypothesis → Experiment → Analysis → Conclusion.\n\n**Recent Discoveries:** Gravitational waves, CRISPR, exoplanets, quantum computing.\n\nWhat scientific field interests you?",
            "Science explores everything from particles to the cosmos. 🌌\n\n**Physics:** Mechanics, quantum physics, relativity, thermodynamics, electromagnetism.\n**Chemistry:** Organic, inorganic, physical, biochemistry.\n**Biology:** Cells, genetics, evolution, ecology.\n**Math:** Algebra, calculus, statistics, number theory.\n**Space:** Astronomy, astrophysics, cosmology.\n\nWhich branch interests you?",
            "Science combines knowledge and discovery methods. 🧪\n\n**Principles:** Empiricism, objectivity, reproducibility, falsifiability, peer review.\n\n**Interdisciplinary:** Biophysics, biochemistry, astrobiology, computational science.\n\n**Current Research:** Climate change, quantum computing, CRISPR, space exploration, AI, renewable energy.\n\nWhat topic interests you?",
        ],
    },
    TopicData {
        name: "general",
        label: "General Interests",
        keywords: &[
            "weather", "food", "music", "movie", "book", "sport", "game", "travel", "hobby",
            "interest", "learn", "study", "education", "school", "college", "university",
        ],
        responses: &[
            "That's cool! 😊 I'd love to chat about that. What specifically interests you?",
            "Nice! 💬 I'm always down to talk about different stuff. What do you want to know?",
            "Sounds interesting! 🌟 What about it catches your interest? I'm here to chat!",
        ],
    },
    TopicData {
        name: "history",
        label: "History",
        keywords: &[
            "history", "historical", "past", "ancient", "war", "battle", "empire", "civilization",
            "world war", "revolution", "medieval", "renaissance",
        ],
        responses: &[
            "History is fascinating! It helps us understand how the world came to be. From ancient civilizations to modern events, history shapes our present. What historical period or event interests you? 📚",
            "The study of history reveals patterns and lessons from the past. Whether it's ancient civilizations, world wars, or cultural movements, each era has unique stories. What would you like to explore? 🏛️",
            "History connects us to our roots and helps us understand humanity's journey. From the rise and fall of empires to scientific discoveries, there's so much to learn! What historical topic catches your interest? 🌍",
        ],
    },
    TopicData {
        name: "health",
        label: "Health",
        keywords: &[
            "health", "medical", "medicine", "doctor", "hospital", "disease", "illness",
            "treatment", "therapy", "wellness", "fitness", "exercise", "nutrition", "diet",
            "mental health",
        ],
        responses: &[
            "Health and wellness are important topics! From physical fitness to mental well-being, maintaining good health is crucial. I can discuss general health topics, but remember I'm not a medical professional. What would you like to know? 💊",
            "Health encompasses physical, mental, and emotional well-being. Exercise, nutrition, sleep, and stress management all play important roles. What aspect of health interests you? 🏥",
            "Taking care of your health involves many factors - diet, exercise, sleep, and mental wellness. While I can provide general information, always consult healthcare professionals for medical advice. What health topic would you like to discuss? 💚",
        ],
    },
    TopicData {
        name: "business",
        label: "Business",
        keywords: &[
            "business", "company", "corporate", "entrepreneur", "startup", "marketing", "sales",
            "finance", "economy", "economics", "investment", "stock", "trade", "management",
            "leadership",
        ],
        responses: &[
            "Business and economics are fascinating fields! From startups to multinational corporations, from marketing to finance, the business world is dynamic and complex. What aspect interests you? 💼",
            "The business world involves strategy, innovation, marketing, finance, and leadership. Whether you're interested in entrepreneurship, investing, or corporate management, there's much to explore! What would you like to know? 📈",
            "Business encompasses many areas - entrepreneurship, marketing, finance, management, and economics. Each plays a crucial role in how companies operate and grow. What business topic would you like to discuss? 🏢",
        ],
    },
    TopicData {
        name: "culture",
        label: "Culture",
        keywords: &[
            "culture", "cultural", "art", "literature", "philosophy", "religion", "language",
            "tradition", "custom", "festival", "celebration", "music", "dance", "theater", "cinema",
        ],
        responses: &[
            "Culture and the arts enrich our lives! From literature to music, from philosophy to visual arts, human culture is diverse and beautiful. What cultural topic interests you? 🎨",
            "Culture encompasses art, music, literature, philosophy, traditions, and beliefs. Each culture has unique expressions and perspectives. What aspect of culture would you like to explore? 📖",
            "The arts and culture reflect human creativity and expression. Whether it's literature, music, visual arts, or philosophy, there's so much to discover! What cultural topic catches your interest? 🎭",
        ],
    },
    TopicData {
        name: "nature",
        label: "Nature",
        keywords: &[
            "nature", "animal", "plant", "environment", "environmental", "climate", "weather",
            "ocean", "forest", "mountain", "wildlife", "ecosystem", "conservation", "planet",
            "earth",
        ],
        responses: &[
            "Nature is amazing! From diverse ecosystems to fascinating wildlife, our planet is full of wonders. Understanding and protecting nature is crucial for our future. What natural topic interests you? 🌿",
            "The natural world is incredibly diverse - from rainforests to oceans, from mountains to deserts. Each ecosystem supports unique life forms. What aspect of nature would you like to explore? 🦋",
            "Nature provides us with beauty, resources, and life itself. Learning about animals, plants, ecosystems, and environmental conservation helps us appreciate and protect our planet. What natural topic interests you? 🌍",
        ],
    },
];
