//! 생성된 Dockerfile 설명 요청 프롬프트.

const EXPLANATION_HEADER: &str = "
Provide a comprehensive and professional explanation of the following Dockerfile, tailored for a senior developer.
The explanation should cover:

1.  **Architecture and Design Choices**:
    -   Detailed breakdown of each build stage (e.g., 'builder', 'sdk', 'final') and its specific purpose.
    -   Rationale behind the chosen base images (e.g., specific version, `alpine` variant, `slim` variant) including benefits (size, security).
    -   In-depth explanation of multi-stage build implementation, how it works, and why it's beneficial (e.g., reducing image size, separating build environment from runtime).

2.  **Security Best Practices**:
    -   How the Dockerfile implements security (e.g., using non-root users, minimizing attack surface by only copying necessary files, not including build tools in final image).
    -   Identification of any security-related environment variables or configurations.

3.  **Performance and Efficiency Optimizations**:
    -   Explanation of caching strategies (e.g., copying `package.json` first, using `npm ci`).
    -   Methods used to reduce the final image size (e.g., multi-stage builds, using minimal base images).
    -   Steps taken to optimize build time.

4.  **Production Readiness and Reliability**:
    -   Environment variable configuration (e.g., `NODE_ENV=production`, `PYTHONUNBUFFERED`).
    -   Considerations for logging and error handling within the container's setup.
    -   If applicable, suggestions for health checks or graceful shutdown.

5.  **General Dockerfile Best Practices**:
    -   Logical flow and structure of instructions.
    -   Usage of `WORKDIR`, `COPY`, `RUN`, `ENV`, `EXPOSE`, `CMD`/`ENTRYPOINT`.
    -   Any other advanced Dockerfile features or patterns employed.

Dockerfile:
```dockerfile
";

const EXPLANATION_FOOTER: &str = "\n```\n";

/// Dockerfile 원문을 고정 설명 템플릿에 그대로 삽입한다.
pub fn build_explanation_prompt(dockerfile: &str) -> String {
    let mut out =
        String::with_capacity(EXPLANATION_HEADER.len() + dockerfile.len() + EXPLANATION_FOOTER.len());
    out.push_str(EXPLANATION_HEADER);
    out.push_str(dockerfile);
    out.push_str(EXPLANATION_FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dockerfile_is_embedded_exactly_once() {
        let prompt = build_explanation_prompt("FROM alpine");
        assert_eq!(prompt.matches("FROM alpine").count(), 1);
        assert!(prompt.contains("```dockerfile\nFROM alpine\n```"));
    }

    #[test]
    fn five_parts_appear_in_order() {
        let prompt = build_explanation_prompt("FROM scratch");
        let parts = [
            "1.  **Architecture and Design Choices**:",
            "2.  **Security Best Practices**:",
            "3.  **Performance and Efficiency Optimizations**:",
            "4.  **Production Readiness and Reliability**:",
            "5.  **General Dockerfile Best Practices**:",
            "Dockerfile:\n",
        ];
        let mut last = 0;
        for part in parts {
            let idx = prompt.find(part).unwrap_or_else(|| panic!("missing {part}"));
            assert!(idx >= last, "{part} is out of order");
            last = idx;
        }
        assert!(prompt.find("FROM scratch").unwrap() > last);
    }

    #[test]
    fn length_grows_linearly_with_input() {
        let overhead = build_explanation_prompt("").len();
        let dockerfile = "RUN echo hi\n".repeat(50);
        assert_eq!(
            build_explanation_prompt(&dockerfile).len(),
            overhead + dockerfile.len()
        );
    }

    #[test]
    fn dockerfile_text_is_not_altered() {
        let dockerfile = "FROM node:22-alpine AS builder\n  WORKDIR /app\n{placeholder}\n";
        assert!(build_explanation_prompt(dockerfile).contains(dockerfile));
    }

    #[test]
    fn checklist_wording_is_fixed() {
        let prompt = build_explanation_prompt("FROM alpine");
        assert!(prompt.starts_with(
            "\nProvide a comprehensive and professional explanation of the following Dockerfile"
        ));
        assert!(prompt.contains("copying `package.json` first, using `npm ci`"));
        assert!(prompt.contains("`NODE_ENV=production`, `PYTHONUNBUFFERED`"));
    }
}
