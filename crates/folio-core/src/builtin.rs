//! The built-in content catalog.
//!
//! Used when no `content.json` has been installed. Hosts that want their
//! own data import a catalog file instead; this one keeps the binary
//! usable out of the box and gives the tests a realistic fixture.

use crate::content::{
    Education, Personal, PortfolioContent, ProjectRecord, Service, Skill, SocialLinks,
    Testimonial,
};

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Construct the default catalog.
pub fn builtin() -> PortfolioContent {
    PortfolioContent {
        personal: Personal {
            name: "Alex Morgan".to_string(),
            title: "Creative Developer & Digital Artist".to_string(),
            tagline: "Crafting exceptional digital experiences with cutting-edge technology"
                .to_string(),
            email: "hello@alexmorgan.dev".to_string(),
            location: "Portland, OR".to_string(),
            resume_url: "/resume.pdf".to_string(),
            social: SocialLinks {
                github: "https://github.com/alexmorgan".to_string(),
                linkedin: "https://linkedin.com/in/alexmorgan".to_string(),
                twitter: "https://twitter.com/alexmorgan".to_string(),
            },
        },
        bio: "I'm a passionate creative developer with 5+ years of experience. I specialize \
              in combining cutting-edge technology with exceptional design to create products \
              that not only look stunning but deliver real value to users."
            .to_string(),
        skills: vec![
            skill("React & Next.js", 95, "Frontend"),
            skill("TypeScript", 90, "Frontend"),
            skill("Three.js & WebGL", 85, "3D Graphics"),
            skill("GSAP & Framer Motion", 88, "Animation"),
            skill("Node.js & Python", 82, "Backend"),
            skill("UI/UX Design", 90, "Design"),
            skill("Figma & Adobe Creative", 85, "Design"),
            skill("AWS & Vercel", 80, "DevOps"),
        ],
        education: vec![
            Education {
                degree: "BS Computer Science".to_string(),
                institution: "Oregon State University".to_string(),
                year: "2014 - 2018".to_string(),
            },
            Education {
                degree: "Certificate in Interaction Design".to_string(),
                institution: "Pacific Northwest College of Art".to_string(),
                year: "2018 - 2019".to_string(),
            },
        ],
        projects: vec![
            ProjectRecord {
                id: 1,
                title: "Immersive AR Shopping".to_string(),
                description: "Revolutionary AR e-commerce platform that allows customers to \
                              visualize products in their space before purchasing."
                    .to_string(),
                category: "Web Development".to_string(),
                tags: strs(&["React", "Three.js", "WebAR", "E-commerce"]),
                image: "/project1.jpg".to_string(),
                live_url: "https://ar-shopping.demo".to_string(),
                github_url: "https://github.com/alexmorgan/ar-shopping".to_string(),
                featured: true,
                year: "2024".to_string(),
            },
            ProjectRecord {
                id: 2,
                title: "Neural Network Visualizer".to_string(),
                description: "Interactive 3D visualization tool for understanding complex \
                              neural network architectures and data flow."
                    .to_string(),
                category: "Data Visualization".to_string(),
                tags: strs(&["Python", "Three.js", "Machine Learning", "WebGL"]),
                image: "/project2.jpg".to_string(),
                live_url: "https://neural-viz.demo".to_string(),
                github_url: "https://github.com/alexmorgan/neural-viz".to_string(),
                featured: true,
                year: "2024".to_string(),
            },
            ProjectRecord {
                id: 3,
                title: "Sustainable Fashion App".to_string(),
                description: "Mobile-first platform connecting eco-conscious consumers with \
                              sustainable fashion brands worldwide."
                    .to_string(),
                category: "Mobile App".to_string(),
                tags: strs(&["React Native", "Node.js", "MongoDB", "Stripe"]),
                image: "/project3.jpg".to_string(),
                live_url: "https://eco-fashion.demo".to_string(),
                github_url: "https://github.com/alexmorgan/eco-fashion".to_string(),
                featured: false,
                year: "2023".to_string(),
            },
            ProjectRecord {
                id: 4,
                title: "Creative Portfolio Site".to_string(),
                description: "Award-winning portfolio website featuring advanced animations \
                              and interactive 3D elements."
                    .to_string(),
                category: "Web Development".to_string(),
                tags: strs(&["Next.js", "GSAP", "Three.js", "Tailwind"]),
                image: "/project4.jpg".to_string(),
                live_url: "https://creative-portfolio.demo".to_string(),
                github_url: "https://github.com/alexmorgan/portfolio".to_string(),
                featured: true,
                year: "2023".to_string(),
            },
            ProjectRecord {
                id: 5,
                title: "Fintech Dashboard".to_string(),
                description: "Comprehensive financial dashboard with real-time data \
                              visualization and advanced analytics."
                    .to_string(),
                category: "Web Development".to_string(),
                tags: strs(&["React", "D3.js", "TypeScript", "GraphQL"]),
                image: "/project5.jpg".to_string(),
                live_url: "https://fintech-dash.demo".to_string(),
                github_url: "https://github.com/alexmorgan/fintech-dash".to_string(),
                featured: false,
                year: "2023".to_string(),
            },
            ProjectRecord {
                id: 6,
                title: "VR Art Gallery".to_string(),
                description: "Virtual reality art gallery allowing artists to showcase their \
                              work in immersive 3D environments."
                    .to_string(),
                category: "VR/AR".to_string(),
                tags: strs(&["A-Frame", "WebXR", "Three.js", "Blockchain"]),
                image: "/project6.jpg".to_string(),
                live_url: "https://vr-gallery.demo".to_string(),
                github_url: "https://github.com/alexmorgan/vr-gallery".to_string(),
                featured: false,
                year: "2022".to_string(),
            },
        ],
        services: vec![
            Service {
                id: 1,
                title: "Web Development".to_string(),
                description: "Custom websites and web applications built with modern \
                              technologies and best practices."
                    .to_string(),
                icon: "Code".to_string(),
                features: strs(&[
                    "React/Next.js Development",
                    "Performance Optimization",
                    "SEO Implementation",
                    "Responsive Design",
                ]),
            },
            Service {
                id: 2,
                title: "3D & Animation".to_string(),
                description: "Immersive 3D experiences and smooth animations that bring your \
                              digital products to life."
                    .to_string(),
                icon: "Box".to_string(),
                features: strs(&[
                    "Three.js Integration",
                    "WebGL Development",
                    "GSAP Animations",
                    "Interactive Experiences",
                ]),
            },
            Service {
                id: 3,
                title: "UI/UX Design".to_string(),
                description: "User-centered design solutions that combine aesthetics with \
                              functionality and usability."
                    .to_string(),
                icon: "Palette".to_string(),
                features: strs(&[
                    "User Research",
                    "Prototyping",
                    "Design Systems",
                    "Usability Testing",
                ]),
            },
            Service {
                id: 4,
                title: "Consulting".to_string(),
                description: "Strategic guidance to help businesses leverage technology for \
                              growth and innovation."
                    .to_string(),
                icon: "Lightbulb".to_string(),
                features: strs(&[
                    "Technology Strategy",
                    "Code Reviews",
                    "Team Training",
                    "Architecture Planning",
                ]),
            },
        ],
        testimonials: vec![
            Testimonial {
                id: 1,
                name: "Sarah Chen".to_string(),
                role: "Head of Design at TechCorp".to_string(),
                company: "TechCorp".to_string(),
                content: "Alex delivered an exceptional website that exceeded all our \
                          expectations. The attention to detail and creative vision was \
                          outstanding."
                    .to_string(),
                avatar: "/testimonial1.jpg".to_string(),
                rating: 5,
            },
            Testimonial {
                id: 2,
                name: "Michael Rodriguez".to_string(),
                role: "CEO at StartupXYZ".to_string(),
                company: "StartupXYZ".to_string(),
                content: "Working with Alex was a game-changer for our product. The \
                          interactive features and animations brought our vision to life \
                          perfectly."
                    .to_string(),
                avatar: "/testimonial2.jpg".to_string(),
                rating: 5,
            },
            Testimonial {
                id: 3,
                name: "Emily Watson".to_string(),
                role: "Product Manager at InnovateLab".to_string(),
                company: "InnovateLab".to_string(),
                content: "Alex's technical expertise and creative approach resulted in a \
                          product that our users absolutely love. Highly recommended!"
                    .to_string(),
                avatar: "/testimonial3.jpg".to_string(),
                rating: 5,
            },
        ],
        categories: strs(&[
            "All",
            "Web Development",
            "Mobile App",
            "Data Visualization",
            "VR/AR",
        ]),
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}
