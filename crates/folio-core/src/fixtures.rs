//! The shipped portfolio content. Read-only after startup; every view and
//! the chat system instruction consume this data.

use crate::domain::{
    Achievement, AssistantPersona, Education, Experience, Portfolio, Profile, Project,
    ProjectLinks, SkillGroup, SkillKey, SocialLinks,
};

impl Portfolio {
    pub fn showcase() -> Self {
        Self {
            profile: Profile {
                name: "Satya Pujith Botuku".to_owned(),
                role: "Full Stack Developer & AI Automation Engineer".to_owned(),
                email: "satyapoojith2@gmail.com".to_owned(),
                phone: "+91-9391994524".to_owned(),
                location: "Hyderabad, India".to_owned(),
                about: "I'm a full-stack developer who builds intelligent applications with AI \
                        integration. I specialize in developing AI automation solutions that \
                        transform ideas into scalable, production-ready systems with seamless \
                        user experiences."
                    .to_owned(),
                social: SocialLinks {
                    github: "https://github.com/SatyaPujith".to_owned(),
                    linkedin: "https://www.linkedin.com/in/botukusatyapujith/".to_owned(),
                    leetcode: "https://leetcode.com/u/SatyaPujith/".to_owned(),
                    geeksforgeeks: "https://www.geeksforgeeks.org/user/23951a5k85/".to_owned(),
                    portfolio: "#".to_owned(),
                },
            },
            projects: vec![
                Project {
                    title: "StudyAI".to_owned(),
                    subtitle: "Intelligent Learning Ecosystem".to_owned(),
                    date: "Oct 2025".to_owned(),
                    description: vec![
                        "AI-powered educational platform generating dynamic study plans and \
                         quizzes."
                            .to_owned(),
                        "Real-time collaboration via secure WebSocket layers and JWT \
                         authentication."
                            .to_owned(),
                        "Integrated Gemini AI and Jitsi Meet for seamless dual video \
                         conferencing."
                            .to_owned(),
                    ],
                    tech: vec![
                        "React".to_owned(),
                        "Node.js".to_owned(),
                        "MongoDB".to_owned(),
                        "Socket.IO".to_owned(),
                        "Gemini AI".to_owned(),
                    ],
                    links: ProjectLinks {
                        github: Some("https://github.com/SatyaPujith/StudyAI-".to_owned()),
                        live: Some("study-ai-delta.vercel.app".to_owned()),
                    },
                },
                Project {
                    title: "OJO".to_owned(),
                    subtitle: "Wikipedia for Everyone's Journey".to_owned(),
                    date: "Sept 2025".to_owned(),
                    description: vec![
                        "Visualizes human life journeys from education to career milestones."
                            .to_owned(),
                        "Interactive frontend built with React 19, Vite, and shadcn/ui."
                            .to_owned(),
                        "Powered by Next.js, Elastic Search, and Gemini AI for intelligent data \
                         synthesis."
                            .to_owned(),
                    ],
                    tech: vec![
                        "React 19".to_owned(),
                        "Next.js".to_owned(),
                        "Elastic Search".to_owned(),
                        "TypeScript".to_owned(),
                        "D3.js".to_owned(),
                    ],
                    links: ProjectLinks {
                        github: Some("https://github.com/SatyaPujith/OjO-Updated".to_owned()),
                        live: Some("ojo-ai.onrender.com".to_owned()),
                    },
                },
                Project {
                    title: "Carsor AI".to_owned(),
                    subtitle: "Vehicle Diagnostics Platform".to_owned(),
                    date: "July 2025".to_owned(),
                    description: vec![
                        "AI-driven platform for Tata vehicles to diagnose issues via voice and \
                         sound."
                            .to_owned(),
                        "Implemented RAG architecture for context-aware issue reporting."
                            .to_owned(),
                        "Features real-time analytics dashboards and repair history tracking."
                            .to_owned(),
                    ],
                    tech: vec![
                        "Next.js".to_owned(),
                        "MongoDB".to_owned(),
                        "RAG".to_owned(),
                        "Gemini AI".to_owned(),
                        "Vector DB".to_owned(),
                    ],
                    links: ProjectLinks {
                        github: Some("https://github.com/SatyaPujith/CarsorAI-Updated".to_owned()),
                        live: Some("carsor-ai-updated.vercel.app".to_owned()),
                    },
                },
            ],
            experience: vec![Experience {
                role: "Summer Research Intern".to_owned(),
                company: "Institute Of Aeronautical Engineering".to_owned(),
                location: "Hyderabad".to_owned(),
                date: "May 2025".to_owned(),
                points: vec![
                    "Designed 'Smart HealthGuard': AI-based DDI checker for underserved \
                     communities."
                        .to_owned(),
                    "Achieved 84% accuracy using Random Forest and SMOTE techniques.".to_owned(),
                    "Enhanced prediction pipeline using custom encoders and RxNorm API."
                        .to_owned(),
                ],
            }],
            education: vec![
                Education {
                    institution: "Institute of Aeronautical Engineering".to_owned(),
                    degree: "B.Tech CSE (Data Science)".to_owned(),
                    date: "Exp. May 2027".to_owned(),
                    score: "8.3/10 GPA".to_owned(),
                },
                Education {
                    institution: "Narayana Junior College".to_owned(),
                    degree: "Intermediate".to_owned(),
                    date: "June 2023".to_owned(),
                    score: "92.7%".to_owned(),
                },
                Education {
                    institution: "Narayana High School".to_owned(),
                    degree: "SSC".to_owned(),
                    date: "March 2021".to_owned(),
                    score: "100.0%".to_owned(),
                },
            ],
            skills: vec![
                SkillGroup {
                    category: "Languages".to_owned(),
                    skills: vec![
                        "JavaScript (ES6+)".to_owned(),
                        "TypeScript".to_owned(),
                        "Python".to_owned(),
                        "Java".to_owned(),
                        "SQL".to_owned(),
                    ],
                },
                SkillGroup {
                    category: "Front-End".to_owned(),
                    skills: vec![
                        "React.js".to_owned(),
                        "Next.js 15".to_owned(),
                        "Vue.js".to_owned(),
                        "Tailwind CSS".to_owned(),
                        "HTML5/CSS3".to_owned(),
                    ],
                },
                SkillGroup {
                    category: "Back-End".to_owned(),
                    skills: vec![
                        "Node.js".to_owned(),
                        "Express.js".to_owned(),
                        "Flask".to_owned(),
                        "Laravel".to_owned(),
                        "Mongoose".to_owned(),
                    ],
                },
                SkillGroup {
                    category: "Databases".to_owned(),
                    skills: vec![
                        "MongoDB".to_owned(),
                        "MySQL".to_owned(),
                        "SQLite".to_owned(),
                        "Vector DB".to_owned(),
                    ],
                },
                SkillGroup {
                    category: "Tools".to_owned(),
                    skills: vec![
                        "Git/GitHub".to_owned(),
                        "Docker".to_owned(),
                        "Postman".to_owned(),
                        "Vite".to_owned(),
                        "XAMPP".to_owned(),
                    ],
                },
            ],
            skill_rows: vec![
                vec![
                    SkillKey::new("Next.js 15", 92),
                    SkillKey::new("Laravel", 88),
                    SkillKey::new("RAG", 85),
                    SkillKey::new("Vector DB", 82),
                    SkillKey::new("Gemini AI", 90),
                    SkillKey::new("WebSocket", 87),
                    SkillKey::new("JWT Auth", 91),
                ],
                vec![
                    SkillKey::new("Elastic Search", 80),
                    SkillKey::new("Socket.IO", 88),
                    SkillKey::new("Mongoose", 90),
                    SkillKey::new("Jitsi Meet", 75),
                    SkillKey::new("SMOTE", 78),
                    SkillKey::new("RxNorm API", 76),
                ],
                vec![
                    SkillKey::new("Google Cloud", 82),
                    SkillKey::new("Random Forest", 84),
                    SkillKey::new("shadcn/ui", 93),
                    SkillKey::new("D3.js", 80),
                    SkillKey::new("Vite", 95),
                ],
            ],
            achievements: vec![
                Achievement {
                    title: "WebNova Hackathon 2025".to_owned(),
                    event: "2nd Place".to_owned(),
                    date: "Nov 2025".to_owned(),
                    description: "Secured for developing 'Study-AI'.".to_owned(),
                },
                Achievement {
                    title: "Techno Udbhav Hackathon 2025".to_owned(),
                    event: "1st Place".to_owned(),
                    date: "Mar 2025".to_owned(),
                    description: "Secured in web app development for 'StarNova'.".to_owned(),
                },
                Achievement {
                    title: "TCS Codevita S12".to_owned(),
                    event: "Global Rank 1398".to_owned(),
                    date: "Feb 2025".to_owned(),
                    description: "Ranked among 5 lakh participants from 96 countries.".to_owned(),
                },
                Achievement {
                    title: "Zignasa Hackathon".to_owned(),
                    event: "2nd Runner-up".to_owned(),
                    date: "Dec 2024".to_owned(),
                    description: "Developed 'Fashion Fusion' - outfit matching platform."
                        .to_owned(),
                },
                Achievement {
                    title: "Forge-Alumnus Code-A-Thon".to_owned(),
                    event: "2nd Runner-up".to_owned(),
                    date: "Mar 2024".to_owned(),
                    description: "Completed two tasks among three with in the time.".to_owned(),
                },
            ],
            assistant: AssistantPersona {
                name: "Satya.AI".to_owned(),
                greeting: "Hi! I'm Satya's AI assistant. Ask me anything about my projects, \
                           skills, or experience."
                    .to_owned(),
                tagline: "Chat with me about my work and experience".to_owned(),
            },
        }
    }
}
