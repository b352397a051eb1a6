use super::{ContactKind, ContactLink, Profile, Project, Skill};

fn skill(title: &str, value: &str, description: &str) -> Skill {
    Skill {
        title: title.into(),
        value: value.into(),
        description: description.into(),
    }
}

fn project(title: &str, description: &str, tech: &str, repository_url: &str) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        tech: tech.into(),
        repository_url: repository_url.into(),
    }
}

/// The profile shipped with the binary.
pub fn builtin_profile() -> Profile {
    Profile {
        first_name: "Ritik".into(),
        last_name: "Khare".into(),
        tagline: "Java Backend Engineer | Spring Boot | Secure APIs".into(),
        role: "Java Backend Developer".into(),
        summary: "MCA graduate from VIT Chennai with hands-on experience building secure backend \
                  systems using Spring Boot, JWT, RBAC, Docker, and MySQL."
            .into(),
        github_url: "https://github.com/khare01".into(),
        resume_path: "/resume.pdf".into(),
        profile_image_path: "/profile.jpg".into(),
        footer_role: "Java Backend Developer".into(),
        about: vec![
            "I am an MCA graduate from Vellore Institute of Technology, Chennai, with a strong \
             interest in backend engineering and secure system design. I work primarily with Java \
             and Spring Boot to build RESTful backend services, focusing on authentication, \
             authorization, and clean API design."
                .into(),
            "I have hands-on experience developing secure backend applications involving JWT-based \
             authentication, role-based access control, and database integration. I enjoy solving \
             backend problems that require clear logic, structured design, and a focus on \
             reliability."
                .into(),
        ],
        skills: vec![
            skill(
                "Programming Languages",
                "Java (8+), Python",
                "Strong foundation in Java with OOP and backend problem solving.",
            ),
            skill(
                "Backend Engineering",
                "Spring Boot, Spring Security, Spring Data JPA, REST APIs, Microservices, Flask",
                "Designed secure modular backend systems.",
            ),
            skill(
                "Security & Authentication",
                "JWT, RBAC, BCrypt, OAuth (Basics)",
                "Implemented authentication & authorization flows.",
            ),
            skill(
                "Databases",
                "MySQL",
                "Experience in relational database design & integration.",
            ),
            skill(
                "DevOps & Containers",
                "Docker",
                "Containerized applications for consistent environments.",
            ),
            skill(
                "Cloud (Basics)",
                "AWS (EC2, S3, IAM)",
                "Basic cloud deployment awareness.",
            ),
            skill(
                "Web Technologies",
                "React.js, HTML, CSS, JavaScript (ES6+), JSON",
                "Built responsive UIs integrated with APIs.",
            ),
            skill(
                "Testing & Quality",
                "JUnit 5, Mockito",
                "Unit testing for business logic reliability.",
            ),
            skill(
                "Tools & Environment",
                "Git, GitHub, Maven, IntelliJ IDEA, VS Code",
                "Modern collaborative development workflow.",
            ),
            skill(
                "Core CS Concepts",
                "OOP, Data Structures & Algorithms, Backend System Design",
                "Strong fundamentals for scalable systems.",
            ),
        ],
        projects: vec![
            project(
                "Identity & Access Management (IAM) Platform",
                "Developed a secure backend platform using Spring Boot with JWT authentication, \
                 RBAC, OTP verification, and Dockerized deployment.",
                "Spring Boot • Spring Security • JWT • MySQL • Docker",
                "https://github.com/khare01/Identity-Access-Management-IAM-Platform",
            ),
            project(
                "Enhanced Multi-Layered Authentication System",
                "Designed an advanced authentication system combining passwords, visual \
                 cryptography, face recognition, liveness detection, and emotion verification.",
                "Flask • FaceNet • MediaPipe • DeepFace • OpenCV",
                "https://github.com/khare01/Enhanced-Multi-Layered-Authentication",
            ),
            project(
                "Multiple Facial Recognition & Automated Attendance System",
                "Built a multi-face recognition attendance system using FaceNet and OpenCV. \
                 Research published at ICICS-2025 (Taylor & Francis).",
                "Python • Streamlit • FaceNet • OpenCV",
                "https://github.com/khare01/Multiple-Facial-Recognition-and-Automated-Attendance-Posting",
            ),
            project(
                "Protecting Images with Facial Biometrics",
                "Developed a research-driven security system that combines facial biometrics with \
                 image encryption. Facial features extracted using CNNs are used to dynamically \
                 generate encryption keys, ensuring secure and tamper-resistant image protection.",
                "Python • OpenCV • CNN • Keras • AES Encryption • NumPy • Cryptography",
                "https://github.com/khare01/Protecting-Images-with-Facial-Biometrics",
            ),
        ],
        contact: vec![
            ContactLink {
                kind: ContactKind::Mail,
                label: "Email".into(),
                url: "mailto:khareji1jan@gmail.com".into(),
            },
            ContactLink {
                kind: ContactKind::GitHub,
                label: "GitHub".into(),
                url: "https://github.com/khare01".into(),
            },
            ContactLink {
                kind: ContactKind::LinkedIn,
                label: "LinkedIn".into(),
                url: "https://linkedin.com/in/ritikkhare01".into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::validate_profile;

    #[test]
    fn test_builtin_counts_and_order() {
        let profile = builtin_profile();
        assert_eq!(profile.skills.len(), 10);
        assert_eq!(profile.projects.len(), 4);
        assert_eq!(profile.skills[0].title, "Programming Languages");
        assert_eq!(profile.skills[9].title, "Core CS Concepts");
        assert_eq!(profile.projects[3].title, "Protecting Images with Facial Biometrics");
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(validate_profile(&builtin_profile()).is_ok());
    }
}
