use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::debug;

use assignment_cli::cli::{
    AdminAction, AssignmentAction, Cli, Command, CourseAction, NoticeAction, NotificationAction,
};
use assignment_cli::client::RemoteClient;
use assignment_cli::config::AppConfig;
use assignment_cli::errors::{ClientError, Result};
use assignment_cli::screens;
use assignment_cli::session::{CredentialStore, SessionStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    setup_panic!();

    let cli = Cli::parse();

    // 初始化配置
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("{}", e.format_simple());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let credentials = Arc::new(CredentialStore::open(&config.credentials.path));
    let client = RemoteClient::new(config, credentials.clone())?;
    let session = SessionStore::new(credentials);
    session.init(&client).await;

    // 角色闸门：整个程序里唯一的角色检查点
    if let Some(roles) = cli.command.required_roles() {
        let user = session.require_user()?;
        if !roles.contains(&user.role) {
            return Err(ClientError::authorization(format!(
                "This command is not available to role '{}'",
                user.role
            )));
        }
        debug!("Dispatching as {} ({})", user.username, user.role);
    }

    dispatch(cli.command, &session, &client).await
}

async fn dispatch(command: Command, session: &SessionStore, client: &RemoteClient) -> Result<()> {
    match command {
        Command::Login { username } => screens::auth::login(session, client, &username).await,
        Command::Logout => {
            screens::auth::logout(session);
            Ok(())
        }
        Command::Register {
            username,
            email,
            role,
        } => screens::auth::register(session, client, &username, &email, role).await,
        Command::Whoami => screens::auth::whoami(session),
        Command::Dashboard => screens::dashboard::show(session, client).await,

        Command::Courses(action) => match action {
            CourseAction::List => screens::courses::list(client).await,
            CourseAction::Show { id } => screens::courses::show(client, id).await,
            CourseAction::Create { name } => screens::courses::create(client, &name).await,
            CourseAction::Update { id, name } => screens::courses::update(client, id, &name).await,
            CourseAction::Delete { id } => screens::courses::delete(client, id).await,
            CourseAction::Join { code } => screens::courses::join(client, &code).await,
            CourseAction::SetStudents { id, student_ids } => {
                screens::courses::set_students(client, id, student_ids).await
            }
        },

        Command::Assignments(action) => match action {
            AssignmentAction::List { course } => screens::assignments::list(client, course).await,
            AssignmentAction::Show { id } => screens::assignments::show(client, id).await,
            AssignmentAction::Create {
                course,
                title,
                description,
                due,
                allow_late,
            } => {
                screens::assignments::create(client, course, &title, &description, &due, allow_late)
                    .await
            }
            AssignmentAction::Update {
                id,
                title,
                description,
                due,
                allow_late,
            } => screens::assignments::update(client, id, title, description, due, allow_late).await,
            AssignmentAction::Delete { id } => screens::assignments::delete(client, id).await,
        },

        Command::Submit {
            assignment_id,
            file,
            message,
        } => screens::submissions::submit(client, assignment_id, file, message).await,
        Command::Resubmit {
            submission_id,
            file,
            message,
        } => screens::submissions::resubmit(client, submission_id, file, message).await,
        Command::MySubmissions => screens::submissions::mine(client).await,
        Command::Submissions { assignment_id } => {
            screens::submissions::for_assignment(client, assignment_id).await
        }
        Command::Grade {
            assignment_id,
            submission_id,
            score,
            feedback,
        } => screens::submissions::grade(client, assignment_id, submission_id, score, feedback).await,

        Command::Notices(action) => match action {
            NoticeAction::List => screens::notices::list(client).await,
            NoticeAction::Show { id } => screens::notices::show(client, id).await,
            NoticeAction::Create { title, content } => {
                screens::notices::create(client, &title, &content).await
            }
            NoticeAction::Update { id, title, content } => {
                screens::notices::update(client, id, &title, &content).await
            }
            NoticeAction::Delete { id } => screens::notices::delete(client, id).await,
        },

        Command::Notifications(action) => match action {
            NotificationAction::List => screens::notifications::list(client).await,
            NotificationAction::Read { id } => screens::notifications::mark_read(client, id).await,
        },

        Command::Admin(action) => match action {
            AdminAction::Users => screens::admin::users(client).await,
            AdminAction::SetRole { user_id, role } => {
                screens::admin::set_role(client, user_id, role).await
            }
            AdminAction::Stats => screens::admin::stats(client).await,
            AdminAction::Logs => screens::admin::logs(client).await,
        },
    }
}
