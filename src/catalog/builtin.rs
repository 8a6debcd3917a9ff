// file: src/catalog/builtin.rs
// version: 1.0.0
// guid: e75831f4-5131-441e-82e9-c32c1f23fc8d

//! Bundled Docker command table

use super::CommandDescription;

struct Entry {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    snippet: &'static str,
}

const DOCKER_COMMANDS: &[Entry] = &[
    Entry {
        category: "Images",
        title: "Build an image",
        description: "Build an image from the Dockerfile in the current directory and tag it.",
        snippet: "docker build -t my-react-app .",
    },
    Entry {
        category: "Images",
        title: "Build for production",
        description: "Select the production stage of a multi-stage Dockerfile.",
        snippet: "docker build \\\n  --target production \\\n  -t my-react-app:prod .",
    },
    Entry {
        category: "Images",
        title: "List images",
        description: "Show all images stored locally.",
        snippet: "docker images",
    },
    Entry {
        category: "Images",
        title: "Remove an image",
        description: "Delete a local image by name or ID.",
        snippet: "docker rmi my-react-app",
    },
    Entry {
        category: "Containers",
        title: "Run the dev server",
        description: "Start a container with the Vite dev server published on port 5173.",
        snippet: "docker run -p 5173:5173 my-react-app",
    },
    Entry {
        category: "Containers",
        title: "Run with live reload",
        description: "Mount the source tree so edits on the host reach the container.",
        snippet: "docker run -p 5173:5173 \\\n  -v \"$(pwd)\":/app \\\n  -v /app/node_modules \\\n  my-react-app",
    },
    Entry {
        category: "Containers",
        title: "Run in the background",
        description: "Detach the container and give it a name.",
        snippet: "docker run -d --name web -p 8080:80 my-react-app:prod",
    },
    Entry {
        category: "Containers",
        title: "List running containers",
        description: "Add -a to include stopped containers.",
        snippet: "docker ps",
    },
    Entry {
        category: "Containers",
        title: "Stop a container",
        description: "Send SIGTERM, then SIGKILL after the grace period.",
        snippet: "docker stop web",
    },
    Entry {
        category: "Containers",
        title: "Remove a container",
        description: "Delete a stopped container.",
        snippet: "docker rm web",
    },
    Entry {
        category: "Debugging",
        title: "Follow logs",
        description: "Stream the output of a running container.",
        snippet: "docker logs -f web",
    },
    Entry {
        category: "Debugging",
        title: "Open a shell",
        description: "Start an interactive shell inside a running container.",
        snippet: "docker exec -it web sh",
    },
    Entry {
        category: "Debugging",
        title: "Inspect a container",
        description: "Print low-level details as JSON.",
        snippet: "docker inspect web",
    },
    Entry {
        category: "Compose",
        title: "Start the stack",
        description: "Build and start every service defined in compose.yaml.",
        snippet: "docker compose up --build",
    },
    Entry {
        category: "Compose",
        title: "Stop the stack",
        description: "Stop and remove the stack's containers and networks.",
        snippet: "docker compose down",
    },
    Entry {
        category: "Compose",
        title: "Run tests in a service",
        description: "Run the Vitest suite in a one-off container.",
        snippet: "docker compose run --rm web npm test",
    },
    Entry {
        category: "Cleanup",
        title: "Prune unused data",
        description: "Remove stopped containers, dangling images and unused networks.",
        snippet: "docker system prune",
    },
    Entry {
        category: "Cleanup",
        title: "Check disk usage",
        description: "Show how much space images, containers and volumes take.",
        snippet: "docker system df",
    },
];

/// The bundled table as owned records, in display order
pub fn docker_commands() -> Vec<CommandDescription> {
    DOCKER_COMMANDS
        .iter()
        .map(|e| {
            CommandDescription::new(e.title, e.snippet)
                .with_description(e.description)
                .with_category(e.category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_is_preserved() {
        let commands = docker_commands();
        assert_eq!(commands.len(), DOCKER_COMMANDS.len());
        assert_eq!(commands[0].title(), "Build an image");
        assert_eq!(commands.last().map(|c| c.title()), Some("Check disk usage"));
    }

    #[test]
    fn test_multiline_snippets_survive() {
        let commands = docker_commands();
        let live_reload = commands
            .iter()
            .find(|c| c.title() == "Run with live reload")
            .unwrap();
        assert_eq!(live_reload.snippet().lines().count(), 4);
        assert!(live_reload.snippet().contains("\\\n  -v"));
    }
}
