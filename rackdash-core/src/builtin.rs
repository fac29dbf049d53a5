//! The compiled-in record set
//!
//! Two machines, the services pinned to them, the dev-log feed, the task
//! list, and the workbench circuit nodes. This is the catalog the dashboard
//! ships with; `rackdash init` dumps it to YAML for editing.

use crate::catalog::CatalogConfig;
use crate::model::{
    ComponentNode, Isolation, LogEntry, Machine, NodeType, Project, ProjectStatus, TodoCategory,
    TodoItem, TodoPriority, TodoStatus,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn config() -> CatalogConfig {
    CatalogConfig {
        version: "1".into(),
        machines: machines(),
        projects: projects(),
        logs: logs(),
        todos: todos(),
        nodes: nodes(),
    }
}

fn machines() -> Vec<Machine> {
    vec![
        Machine {
            id: "r5".into(),
            name: "R5 3600 Server".into(),
            host_label: "R5 Server".into(),
            role: "Remote compute / CasaOS home cloud".into(),
            cpu: "AMD Ryzen 5 3600 (6C/12T)".into(),
            gpu: "ZOTAC GTX 1060 6GB".into(),
            ram: "16GB DDR4 (hard cap)".into(),
            storage: strings(&[
                "512GB M.2 (system, Ubuntu)",
                "1TB MX200 SSD (data)",
                "4TB IronWolf NAS HDD",
            ]),
            os: "Ubuntu Server + CasaOS".into(),
            isolation_tech: "Docker containers (high density)".into(),
            resource_limit: "16GB RAM max".into(),
            key_projects: strings(&["LLM", "Minecraft", "CasaOS", "Streaming"]),
            description: "Backend compute and Docker services, managed through CasaOS. \
                          Runs headless in the rack; hardware refreshed to a Ryzen 3600 \
                          with a 1060 6GB."
                .into(),
            ports: strings(&["RJ45 1Gbps"]),
        },
        Machine {
            id: "katana17".into(),
            name: "MSI Katana 17 B13VGK".into(),
            host_label: "Katana17".into(),
            role: "Daily driver / security lab / development".into(),
            cpu: "Intel Core i7-13620H (10C/16T)".into(),
            gpu: "NVIDIA RTX 4070 Laptop (8GB)".into(),
            ram: "16GB DDR5-5200 (max 64GB)".into(),
            storage: strings(&["1TB NVMe PCIe Gen4"]),
            os: "Windows 11 (uv environment)".into(),
            isolation_tech: "KVM/VM + native uv".into(),
            resource_limit: "105W TGP / MUX switch".into(),
            key_projects: strings(&["Whonix", "Kali Linux", "Python (uv)"]),
            description: "Main terminal for daily work, development and security tasks. \
                          Python tooling is managed with uv, heavier isolation runs in \
                          VirtualBox VMs."
                .into(),
            ports: strings(&["1x USB-C (DP)", "1x HDMI 2.1 (8K)", "1x RJ45"]),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            name: "LLM Inference".into(),
            host: "R5 Server".into(),
            isolation: Isolation::Container,
            ram_allocated: "8GB".into(),
            ram_percentage: 50.0,
            status: ProjectStatus::Maintenance,
            description: "Core resources being re-planned; paused while the deployment \
                          is reshuffled."
                .into(),
            color: "#10b981".into(),
            tech_stack: strings(&["Ollama", "Llama 3 8B", "NVIDIA CUDA"]),
            port: Some("11434".into()),
            aliases: strings(&["ai", "llm"]),
            overhead: false,
        },
        Project {
            name: "Minecraft Server".into(),
            host: "R5 Server".into(),
            isolation: Isolation::Container,
            ram_allocated: "4GB".into(),
            ram_percentage: 25.0,
            status: ProjectStatus::Running,
            description: "Open and playable. Pending: plugin permissions (TPA, land \
                          claims) and the double-NAT reachability problem."
                .into(),
            color: "#3b82f6".into(),
            tech_stack: strings(&["Java 17", "PaperMC", "Docker Compose"]),
            port: Some("25565".into()),
            aliases: strings(&["minecraft"]),
            overhead: false,
        },
        Project {
            name: "Streaming / CasaOS".into(),
            host: "R5 Server".into(),
            isolation: Isolation::Container,
            ram_allocated: "1GB".into(),
            ram_percentage: 6.25,
            status: ProjectStatus::Running,
            description: "Media streaming plus the CasaOS panel; lightweight deployment."
                .into(),
            color: "#8b5cf6".into(),
            tech_stack: strings(&["CasaOS UI", "Nginx", "FFmpeg"]),
            port: Some("80 / 443".into()),
            aliases: strings(&["jellyfin", "streaming", "casaos"]),
            overhead: false,
        },
        Project {
            name: "Host OS / Buffer".into(),
            host: "R5 Server".into(),
            isolation: Isolation::Container,
            ram_allocated: "3GB".into(),
            ram_percentage: 18.75,
            status: ProjectStatus::Running,
            description: "Ubuntu kernel and reserved I/O buffer headroom.".into(),
            color: "#64748b".into(),
            tech_stack: strings(&["Ubuntu 22.04 LTS", "Kernel 5.15"]),
            port: None,
            aliases: Vec::new(),
            overhead: true,
        },
        Project {
            name: "Whonix".into(),
            host: "Katana17".into(),
            isolation: Isolation::VirtualMachine,
            ram_allocated: "4GB".into(),
            ram_percentage: 0.0,
            status: ProjectStatus::Idle,
            description: "Highest-grade network and system isolation, all traffic forced \
                          through Tor."
                .into(),
            color: "#f59e0b".into(),
            tech_stack: strings(&["Whonix Gateway", "Whonix Workstation", "Tor", "VirtualBox"]),
            port: Some("N/A (isolated)".into()),
            aliases: Vec::new(),
            overhead: false,
        },
        Project {
            name: "Kali Linux".into(),
            host: "Katana17".into(),
            isolation: Isolation::VirtualMachine,
            ram_allocated: "4GB".into(),
            ram_percentage: 0.0,
            status: ProjectStatus::Stopped,
            description: "Dedicated environment for penetration-testing tooling.".into(),
            color: "#06b6d4".into(),
            tech_stack: strings(&["Kali Rolling", "Metasploit", "Burp Suite", "VirtualBox"]),
            port: Some("N/A (isolated)".into()),
            aliases: Vec::new(),
            overhead: false,
        },
        Project {
            name: "Python Dev (uv)".into(),
            host: "Katana17".into(),
            isolation: Isolation::Native,
            ram_allocated: "Dynamic".into(),
            ram_percentage: 0.0,
            status: ProjectStatus::Running,
            description: "Native Windows development environment; uv handles package \
                          management, no Docker Desktop."
                .into(),
            color: "#ec4899".into(),
            tech_stack: strings(&["uv", "Python 3.12", "FastAPI", "Windows 11"]),
            port: Some("8000 (dev)".into()),
            aliases: Vec::new(),
            overhead: false,
        },
    ]
}

fn logs() -> Vec<LogEntry> {
    vec![
        LogEntry {
            date: "2024-05-30".into(),
            title: "Vercel build and blank-screen fix (final)".into(),
            content: "Forced the AI SDK dependency to a wildcard version to reset the \
                      lockfile after npm ETARGET, confirmed the importmap block that \
                      blanked the page is gone from index.html, and added an .npmrc to \
                      settle dependency conflicts."
                .into(),
            tags: strings(&["Bugfix", "Vercel", "Critical"]),
        },
        LogEntry {
            date: "2024-05-30".into(),
            title: "Vercel build fix (npm ETARGET)".into(),
            content: "The pinned SDK version does not exist on npm. Switched the \
                      dependency to 'latest' so the newest SDK is pulled automatically, \
                      with legacy-peer-deps=true in .npmrc to avoid conflicts."
                .into(),
            tags: strings(&["Bugfix", "npm", "Dependencies"]),
        },
        LogEntry {
            date: "2024-05-30".into(),
            title: "Vercel build failure (npm ERESOLVE)".into(),
            content: "Resolved the dependency conflict raised during npm install (icon \
                      library version mismatch): added .npmrc with legacy-peer-deps=true \
                      and moved the package to its latest release."
                .into(),
            tags: strings(&["Bugfix", "Vercel", "npm"]),
        },
        LogEntry {
            date: "2024-05-30".into(),
            title: "Persistent blank screen (importmap conflict)".into(),
            content: "The blank page after deploy came from a leftover importmap block \
                      in index.html; the bundler and the importmap fight over module \
                      resolution. Removed the importmap entirely so the bundle loads \
                      cleanly."
                .into(),
            tags: strings(&["Bugfix", "Vite", "Deployment", "Importmap"]),
        },
        LogEntry {
            date: "2024-05-29".into(),
            title: "Vercel build environment fix (critical)".into(),
            content: "Browsers cannot execute raw .tsx sources. Introduced a Vite + \
                      TypeScript build step (package.json, vite.config.ts, \
                      tsconfig.json) so the site is compiled before deploy."
                .into(),
            tags: strings(&["Bugfix", "Vite", "Infrastructure"]),
        },
        LogEntry {
            date: "2024-05-29".into(),
            title: "Blank-screen hotfix".into(),
            content: "index.html was missing the module entry script, so the app never \
                      mounted. Added the script tag and redeployed."
                .into(),
            tags: strings(&["Bugfix", "Vercel", "Deployment"]),
        },
        LogEntry {
            date: "2024-05-29".into(),
            title: "Deploy confirmed, traffic check".into(),
            content: "Dashboard is live. The '100 GB' figure on the hosting panel is the \
                      free-tier quota, not the site size; actual usage is in the KB \
                      range, so bandwidth cost is a non-issue."
                .into(),
            tags: strings(&["Deployment", "Vercel", "Monitoring"]),
        },
        LogEntry {
            date: "2024-05-29".into(),
            title: "Deployment kickoff".into(),
            content: "Settled on Vercel/Netlify hosting. Added vercel.json and \
                      netlify.toml for SPA route rewrites; the repository is ready to \
                      push to GitHub for CI/CD."
                .into(),
            tags: strings(&["Deployment", "CI/CD", "Vercel"]),
        },
        LogEntry {
            date: "2024-05-28".into(),
            title: "Dashboard hosting options".into(),
            content: "Evaluated publishing the dashboard: plan A is Vercel/Netlify with \
                      GitHub auto-deploy; plan B is self-hosting an Nginx container on \
                      the R5 CasaOS box behind a Cloudflare Tunnel to bypass the double \
                      NAT."
                .into(),
            tags: strings(&["Deployment", "Vercel", "Self-Hosted"]),
        },
        LogEntry {
            date: "2024-05-27".into(),
            title: "Minecraft launch and network trouble".into(),
            content: "The Minecraft server core is stable and players can log in. Two \
                      open problems: Residence/TPA plugin permissions are unconfigured, \
                      and the apartment uplink sits behind a double NAT, so port \
                      forwarding fails; looking at tunnel options for external access."
                .into(),
            tags: strings(&["Minecraft", "Network", "Issues"]),
        },
        LogEntry {
            date: "2024-05-26".into(),
            title: "Katana17 dev environment (uv)".into(),
            content: "Moved Python project management on Windows 11 to uv, replacing \
                      Anaconda/pip. Uninstalled Docker Desktop to reclaim RAM; all \
                      container workloads now live on the R5 server."
                .into(),
            tags: strings(&["Optimization", "uv", "Python"]),
        },
        LogEntry {
            date: "2024-05-24".into(),
            title: "Hardware refresh and CasaOS install".into(),
            content: "R5 server upgraded to a Ryzen 3600 with a GTX 1060 6GB. Migrated \
                      the OS to Ubuntu Server and installed CasaOS to manage the Docker \
                      containers."
                .into(),
            tags: strings(&["Hardware", "CasaOS", "Ubuntu"]),
        },
    ]
}

fn todos() -> Vec<TodoItem> {
    let item = |id: &str, task: &str, category, priority, status| TodoItem {
        id: id.into(),
        task: task.into(),
        category,
        priority,
        status,
    };

    vec![
        item(
            "t1",
            "Sort out Residence territory and TPA plugin permissions for Minecraft",
            TodoCategory::Minecraft,
            TodoPriority::High,
            TodoStatus::InProgress,
        ),
        item(
            "t2",
            "Work around the double NAT with a tunnel so Minecraft is reachable \
             from outside",
            TodoCategory::Network,
            TodoPriority::High,
            TodoStatus::Pending,
        ),
        item(
            "t3",
            "Re-plan the RAM budget for the LLM container before re-enabling Ollama",
            TodoCategory::AiModel,
            TodoPriority::Medium,
            TodoStatus::Pending,
        ),
        item(
            "t4",
            "Evaluate NVENC hardware transcoding for Jellyfin on the GTX 1060",
            TodoCategory::Jellyfin,
            TodoPriority::Medium,
            TodoStatus::Pending,
        ),
        item(
            "t5",
            "Mount the 4TB IronWolf under CasaOS and move media shares onto it",
            TodoCategory::System,
            TodoPriority::Medium,
            TodoStatus::Pending,
        ),
        item(
            "t6",
            "Migrate the remaining Python projects on Katana17 to uv",
            TodoCategory::Backend,
            TodoPriority::Low,
            TodoStatus::Done,
        ),
        item(
            "t7",
            "Polish the dashboard detail views (stack diagram, RAM chart legend)",
            TodoCategory::Frontend,
            TodoPriority::Low,
            TodoStatus::InProgress,
        ),
        item(
            "t8",
            "Snapshot the Whonix and Kali VMs before the next VirtualBox upgrade",
            TodoCategory::System,
            TodoPriority::Low,
            TodoStatus::Pending,
        ),
    ]
}

fn nodes() -> Vec<ComponentNode> {
    let node = |id: &str, label: &str, node_type, description: &str, details: Option<&str>| {
        ComponentNode {
            id: id.into(),
            label: label.into(),
            node_type,
            description: description.into(),
            circuit_details: details.map(|d| d.to_string()),
        }
    };

    vec![
        node(
            "input-jack",
            "Input Jack",
            NodeType::Signal,
            "6.35mm mono input jack feeding the effect chain.",
            Some(
                "Tip carries the instrument signal; sleeve is common ground. The \
                 switched contact cuts battery power when unplugged.",
            ),
        ),
        node(
            "cin",
            "Input Cap (Cin)",
            NodeType::Signal,
            "Input coupling capacitor blocking DC from the pickup signal.",
            Some("100nF film cap; forms a high-pass with the fuzz input impedance."),
        ),
        node(
            "bjt-fuzz",
            "BJT Fuzz Core",
            NodeType::Signal,
            "Two-transistor fuzz stage, the heart of the signal path.",
            Some(
                "Cascaded NPN pair with feedback bias; the gain pot sets the drive \
                 into the second stage.",
            ),
        ),
        node(
            "volume",
            "Volume Pot",
            NodeType::Signal,
            "Output level control after the fuzz stage.",
            Some("100k audio-taper pot wired as an attenuator ahead of the output jack."),
        ),
        node(
            "3pdt",
            "3PDT Footswitch",
            NodeType::Signal,
            "True-bypass switch routing input through the effect or straight to the output.",
            Some("Third pole drives the status LED."),
        ),
        node(
            "output-jack",
            "Output Jack",
            NodeType::Signal,
            "6.35mm mono output to the amplifier.",
            None,
        ),
        node(
            "ldr",
            "Light Theremin (LDR)",
            NodeType::Ui,
            "Photoresistor that bends the oscillator pitch with ambient light.",
            Some(
                "LDR sits in the oscillator RC path; more light lowers the resistance \
                 and raises the pitch.",
            ),
        ),
        node(
            "led",
            "Status LED",
            NodeType::Ui,
            "Indicates the effect is engaged.",
            None,
        ),
        node(
            "knobs",
            "Control Knobs",
            NodeType::Ui,
            "Gain and volume controls on the can lid.",
            None,
        ),
        node(
            "battery",
            "9V Battery",
            NodeType::Power,
            "Primary supply for the fuzz and oscillator stages.",
            Some("Snap connector wired through the input-jack switch contact."),
        ),
        node(
            "dc-jack",
            "DC Jack",
            NodeType::Power,
            "Center-negative 9V DC input overriding the battery.",
            None,
        ),
    ]
}
