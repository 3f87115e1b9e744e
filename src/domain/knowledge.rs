//! 언어별 Dockerfile 모범 사례 지식 베이스(정적 데이터).
//!
//! 키는 정규화하지 않는다. `"python"`은 `"Python"`과 일치하지 않으며,
//! 일치하지 않는 언어는 언어별 컨텍스트 없이 일반 프롬프트로 처리된다.

/// 언어 이름과 가이드 텍스트 한 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub name: &'static str,
    pub guidance: &'static str,
}

pub const LANGUAGE_PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "Node.js",
        guidance: "For Node.js applications, prioritize:
  - Multi-stage builds: a 'builder' stage for `npm install` (including dev dependencies) and `npm run build` (for TypeScript compilation or asset bundling), and a 'production' stage for the compiled output and production-only dependencies.
  - Base image: `node:<version>-alpine` (e.g., `node:22-alpine` or `node:lts-alpine`) for a small footprint.
  - Dependency management: Copy `package.json` and `package-lock.json` (or `yarn.lock`) first to leverage Docker's build cache. Use `npm ci --production` in the final stage.
  - Non-root user: Run the application as a non-root user (e.g., `node` user) for security.
  - Environment: Set `NODE_ENV=production`.
  - Entry point: Typically `CMD [\"node\", \"dist/index.js\"]` or `CMD [\"npm\", \"start\"]`.
  - Port: Expose relevant application port (e.g., 3000, 8080).",
    },
    LanguageProfile {
        name: "Python",
        guidance: "For Python applications, prioritize:
  - Multi-stage builds: a 'builder' stage for `pip install` (including build dependencies) and a 'production' stage for installed packages and application code.
  - Base image: `python:<version>-slim-bullseye` (e.g., `python:3.11-slim-bullseye`) for a balanced size/feature set, or `python:<version>-alpine` if strict minimal.
  - Dependency management: Copy `requirements.txt` first. Use `pip install --no-cache-dir -r requirements.txt`.
  - Environment: Set `PYTHONUNBUFFERED=1` for immediate log output.
  - Non-root user: Run as a non-root user.
  - Entry point: `CMD [\"gunicorn\", ...]`, `CMD [\"python\", \"app.py\"]`, or specific web server commands.
  - Port: Expose relevant application port (e.g., 8000 for FastAPI/Django).",
    },
    LanguageProfile {
        name: "Java",
        guidance: "For Java applications (Spring Boot, Quarkus, etc.), prioritize:
  - Multi-stage builds: a 'builder' stage for Maven/Gradle build (`mvn package`, `gradle build`), and a 'runner' stage for a JRE (Java Runtime Environment) and the final JAR/WAR.
  - Base image: `eclipse-temurin:<version>-jdk-focal` (for builder) and `eclipse-temurin:<version>-jre-focal` (for runner), or `alpine` variants for minimalism.
  - Application packaging: Copy the compiled JAR/WAR.
  - Memory: Set `JAVA_TOOL_OPTIONS` for JVM memory tuning (e.g., `-Xmx256m`).
  - Entry point: `ENTRYPOINT [\"java\", \"-jar\", \"app.jar\"]`.
  - Port: Expose relevant application port (e.g., 8080).",
    },
    LanguageProfile {
        name: "Go",
        guidance: "For Go applications, prioritize:
  - Multi-stage builds: a 'builder' stage using `golang:<version>-alpine` for compilation, and a 'final' stage using `scratch` or `alpine` for the statically linked executable.
  - Static compilation: Ensure `CGO_ENABLED=0` and `GOOS=linux` during build.
  - Minimal final image: Copy only the compiled binary to the final stage.
  - Entry point: `CMD [\"./app-name\"]`.
  - Port: Expose relevant application port.",
    },
    LanguageProfile {
        name: "Ruby",
        guidance: "For Ruby applications (e.g., Rails), prioritize:
  - Multi-stage builds: a 'builder' stage for `bundle install` (often with `--without development test`) and asset precompilation, and a 'production' stage for the application and vendored gems.
  - Base image: `ruby:<version>-alpine` or `ruby:<version>-slim`.
  - Dependency management: Use `BUNDLE_PATH` for vendored gems.
  - Non-root user: Run as a non-root user.
  - Entry point: `CMD [\"bundle\", \"exec\", \"rails\", \"s\", \"-b\", \"0.0.0.0\", \"-p\", \"3000\"]` for Rails, or specific Rack server commands.
  - Port: Expose relevant application port (e.g., 3000).",
    },
    LanguageProfile {
        name: "PHP",
        guidance: "For PHP applications (e.g., Laravel, Symfony), prioritize:
  - Multi-stage builds: a 'composer' stage for installing Composer dependencies (`composer install --no-dev --optimize-autoloader`), and a 'final' stage with PHP-FPM or Apache/Nginx.
  - Base image: `php:<version>-fpm-alpine` (for FPM) or `php:<version>-apache` (for Apache).
  - Web server setup: Include Nginx or Apache configuration if serving web content.
  - Permissions: Set proper permissions for web server and application directories.
  - Entry point: `CMD [\"php-fpm\"]` or `CMD [\"apache2-foreground\"]`.
  - Port: Expose relevant application port (e.g., 80, 8080).",
    },
    LanguageProfile {
        name: "Rust",
        guidance: "For Rust applications, prioritize:
  - Multi-stage builds: a 'builder' stage using `rust:<version>-slim-buster` or `rust:<version>-alpine` for compiling the release binary, and a 'final' stage using `scratch` or `alpine`.
  - Compilation: Use `cargo build --release`.
  - Minimal final image: Copy only the compiled release binary to the final stage.
  - Entry point: `CMD [\"./target/release/app-name\"]`.
  - Port: Expose relevant application port.",
    },
    LanguageProfile {
        name: "C#",
        guidance: "For C# (.NET Core/.NET) applications, prioritize:
  - Multi-stage builds: an 'sdk' stage using `mcr.microsoft.com/dotnet/sdk:<version>` for restoring dependencies, building, and publishing, and an 'aspnet' stage using `mcr.microsoft.com/dotnet/aspnet:<version>` for runtime.
  - Build process: `dotnet restore`, `dotnet build`, `dotnet publish`.
  - Entry point: `ENTRYPOINT [\"dotnet\", \"App.dll\"]`.
  - Port: Expose relevant application port (e.g., 8080).",
    },
    LanguageProfile {
        name: "C++",
        guidance: "For C++ applications, prioritize:
  - Multi-stage builds: a 'builder' stage using a compiler image (e.g., `gcc:latest`, `ubuntu:latest` with `build-essential`) for compilation, and a 'final' stage using a minimal base image (e.g., `alpine`, `debian:slim`).
  - Compilation: Use appropriate `g++` or `clang++` commands. Link static libraries where possible.
  - Minimal final image: Copy only the compiled executable to the final stage.
  - Entry point: `CMD [\"./app-name\"]`.
  - Port: Expose relevant application port if it's a networked application.",
    },
    LanguageProfile {
        name: "TypeScript",
        guidance: "For TypeScript applications, follow Node.js best practices with an emphasis on the compilation step.
  - Multi-stage builds: a 'builder' stage for `npm install` and `npm run build` (which typically invokes `tsc`).
  - Base image: `node:<version>-alpine`.
  - Build output: Ensure the `dist` or `build` folder containing compiled JavaScript is copied to the final stage.
  - Entry point: `CMD [\"node\", \"dist/index.js\"]`.",
    },
];

/// 정확히 일치하는 언어 이름의 가이드 텍스트를 반환한다.
pub fn lookup(language: &str) -> Option<&'static str> {
    LANGUAGE_PROFILES
        .iter()
        .find(|profile| profile.name == language)
        .map(|profile| profile.guidance)
}

/// 지식 베이스에 등록된 언어 이름(테이블 순서).
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_PROFILES.iter().map(|profile| profile.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_canonical_names() {
        for name in [
            "Node.js",
            "Python",
            "Java",
            "Go",
            "Ruby",
            "PHP",
            "Rust",
            "C#",
            "C++",
            "TypeScript",
        ] {
            assert!(lookup(name).is_some(), "missing profile for {name}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("Python").is_some());
        assert!(lookup("python").is_none());
        assert!(lookup("RUST").is_none());
        assert!(lookup(" Go").is_none());
    }

    #[test]
    fn unknown_language_has_no_profile() {
        assert!(lookup("Haskell").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn profile_names_are_unique() {
        let names: Vec<_> = supported_languages().collect();
        for (idx, name) in names.iter().enumerate() {
            assert!(!names[idx + 1..].contains(name), "duplicate profile {name}");
        }
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn each_guidance_names_its_language() {
        for profile in LANGUAGE_PROFILES {
            assert!(
                profile.guidance.starts_with("For "),
                "unexpected guidance header for {}",
                profile.name
            );
            assert!(profile.guidance.contains(profile.name));
        }
    }

    #[test]
    fn guidance_text_is_pinned() {
        let pinned = [
            ("Node.js", "Use `npm ci --production` in the final stage."),
            ("Python", "`python:3.11-slim-bullseye`"),
            ("Java", "(e.g., `-Xmx256m`)"),
            ("Java", "`eclipse-temurin:<version>-jre-focal` (for runner)"),
            ("Go", "Ensure `CGO_ENABLED=0` and `GOOS=linux` during build."),
            ("Ruby", "(often with `--without development test`)"),
            ("PHP", "Set proper permissions for web server and application directories."),
            ("Rust", "`rust:<version>-slim-buster`"),
            ("Rust", "`CMD [\"./target/release/app-name\"]`"),
            ("C#", "`dotnet restore`, `dotnet build`, `dotnet publish`."),
            ("C++", "`gcc:latest`, `ubuntu:latest` with `build-essential`"),
            ("TypeScript", "with an emphasis on the compilation step.\n  - Multi-stage builds"),
        ];
        for (language, needle) in pinned {
            let guidance = lookup(language).unwrap();
            assert!(guidance.contains(needle), "{language} guidance lost {needle:?}");
        }
    }
}
