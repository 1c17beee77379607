//! The built-in blueprints.
//!
//! Template bodies live next to this file under `templates/` and are embedded
//! at compile time.

use super::{Blueprint, ContextKind, Dependency, FileEntry, PostStep};
use crate::config::ProjectType;

const COBRA: Dependency = Dependency {
    module: "github.com/spf13/cobra",
    version: "v1.8.0",
};

const GRPC: Dependency = Dependency {
    module: "google.golang.org/grpc",
    version: "v1.65.0",
};

const PROTOBUF: Dependency = Dependency {
    module: "google.golang.org/protobuf",
    version: "v1.34.2",
};

const GO_MOD: FileEntry = FileEntry {
    path: "go.mod",
    body: include_str!("templates/common/go.mod.tmpl"),
    context: ContextKind::Manifest,
};

const README: FileEntry = FileEntry {
    path: "README.md",
    body: include_str!("templates/common/README.md.tmpl"),
    context: ContextKind::Readme,
};

const fn project_file(path: &'static str, body: &'static str) -> FileEntry {
    FileEntry {
        path,
        body,
        context: ContextKind::Project,
    }
}

pub(super) static CLI: Blueprint = Blueprint {
    project_type: ProjectType::Cli,
    directories: &["cmd", "internal/commands", "pkg", "configs", "scripts"],
    files: &[
        project_file("main.go", include_str!("templates/cli/main.go.tmpl")),
        project_file("cmd/root.go", include_str!("templates/cli/root.go.tmpl")),
        project_file(
            "internal/commands/example.go",
            include_str!("templates/cli/example.go.tmpl"),
        ),
        GO_MOD,
        README,
    ],
    dependencies: &[COBRA],
    post_steps: &[],
};

pub(super) static WEB: Blueprint = Blueprint {
    project_type: ProjectType::Web,
    directories: &[
        "cmd/server",
        "internal/handlers",
        "internal/middleware",
        "internal/models",
        "internal/services",
        "pkg/database",
        "pkg/config",
        "configs",
        "scripts/migrations",
        "api",
    ],
    files: &[
        project_file("main.go", include_str!("templates/web/main.go.tmpl")),
        project_file(
            "internal/handlers/handlers.go",
            include_str!("templates/web/handlers.go.tmpl"),
        ),
        project_file(
            "internal/middleware/middleware.go",
            include_str!("templates/web/middleware.go.tmpl"),
        ),
        project_file(
            "configs/config.yaml",
            include_str!("templates/web/config.yaml.tmpl"),
        ),
        GO_MOD,
        README,
    ],
    dependencies: &[COBRA],
    post_steps: &[],
};

pub(super) static MICROSERVICE: Blueprint = Blueprint {
    project_type: ProjectType::Microservice,
    directories: &[
        "cmd/server",
        "internal/service",
        "internal/proto",
        "pkg/interceptors",
        "pkg/client",
        "configs",
        "scripts",
        "api",
    ],
    files: &[
        project_file("main.go", include_str!("templates/microservice/main.go.tmpl")),
        project_file(
            "internal/service/service.go",
            include_str!("templates/microservice/service.go.tmpl"),
        ),
        project_file(
            "internal/proto/service.proto",
            include_str!("templates/microservice/service.proto.tmpl"),
        ),
        project_file(
            "scripts/proto-gen.sh",
            include_str!("templates/microservice/proto-gen.sh.tmpl"),
        ),
        GO_MOD,
        README,
    ],
    dependencies: &[GRPC, PROTOBUF],
    post_steps: &[PostStep::MakeExecutable("scripts/proto-gen.sh")],
};

pub(super) static LIBRARY: Blueprint = Blueprint {
    project_type: ProjectType::Library,
    directories: &[
        "pkg/{{.ProjectName}}",
        "examples",
        "internal/helpers",
        "scripts",
        "docs",
    ],
    files: &[
        project_file(
            "pkg/{{.ProjectName}}/{{.ProjectName}}.go",
            include_str!("templates/library/lib.go.tmpl"),
        ),
        project_file(
            "examples/example.go",
            include_str!("templates/library/example.go.tmpl"),
        ),
        project_file(
            "pkg/{{.ProjectName}}/{{.ProjectName}}_test.go",
            include_str!("templates/library/lib_test.go.tmpl"),
        ),
        project_file("LICENSE", include_str!("templates/library/LICENSE.tmpl")),
        GO_MOD,
        README,
    ],
    dependencies: &[COBRA],
    post_steps: &[],
};

pub(super) static TOOL: Blueprint = Blueprint {
    project_type: ProjectType::Tool,
    directories: &["cmd/commands", "internal/utils", "pkg", "configs", "scripts"],
    files: &[
        project_file("main.go", include_str!("templates/tool/main.go.tmpl")),
        project_file(
            "cmd/commands/process.go",
            include_str!("templates/tool/process.go.tmpl"),
        ),
        project_file(
            "cmd/commands/analyze.go",
            include_str!("templates/tool/analyze.go.tmpl"),
        ),
        project_file(
            "internal/utils/utils.go",
            include_str!("templates/tool/utils.go.tmpl"),
        ),
        GO_MOD,
        README,
    ],
    dependencies: &[COBRA],
    post_steps: &[],
};
