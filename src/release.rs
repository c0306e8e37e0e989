use crate::{
    action::{context::Context, Inputs, Reporter},
    config::{output, ConfigError, ReleaseConfig, Settings},
    github::{github_client::GithubClient, response::ReleaseResponse, ReleaseApi},
    http,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Remote(#[from] http::Error),
    #[error("Failed to set outputs: {cause}")]
    Output {
        #[source]
        cause: io::Error,
    },
}

/// Creates the release against the GitHub API. Failures are reported through
/// `reporter`, never returned.
pub async fn run(
    inputs: &impl Inputs,
    context: &Context,
    settings: &Settings,
    reporter: &mut impl Reporter,
) {
    let client = match settings.token(inputs) {
        Ok(token) => GithubClient::new(token, &settings.api_url),
        Err(err) => {
            reporter.set_failed(&err.to_string());
            return;
        }
    };

    create(inputs, context, &client, reporter).await
}

pub async fn create(
    inputs: &impl Inputs,
    context: &Context,
    api: &impl ReleaseApi,
    reporter: &mut impl Reporter,
) {
    if let Err(err) = try_create(inputs, context, api, reporter).await {
        log::debug!("release creation failed: {:?}", err);
        reporter.set_failed(&err.to_string());
    }
}

async fn try_create(
    inputs: &impl Inputs,
    context: &Context,
    api: &impl ReleaseApi,
    reporter: &mut impl Reporter,
) -> Result<(), ActionError> {
    let config = ReleaseConfig::resolve(inputs, context)?;

    reporter.info(&format!(
        "Trying to create release with options: {:?}",
        config
    ));

    let release = api.create_release(&config).await?;

    publish(&release, reporter)
}

fn publish(release: &ReleaseResponse, reporter: &mut impl Reporter) -> Result<(), ActionError> {
    let id = release.id.to_string();

    reporter
        .set_outputs(&[
            (output::ID, id.as_str()),
            (output::HTML_URL, release.html_url.as_str()),
            (output::UPLOAD_URL, release.upload_url.as_str()),
        ])
        .map_err(|cause| ActionError::Output { cause })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        action::{inputs::EnvInputs, Vars},
        github::response::ReleaseId,
    };
    use std::{
        cell::{Cell, RefCell},
        collections::HashSet,
    };

    const SHA: &str = "ffac537e6cbbf934b08745a378932722df287a53";

    #[derive(Default)]
    struct Recorder {
        infos: Vec<String>,
        outputs: Vec<(String, String)>,
        failures: Vec<String>,
    }

    impl Reporter for Recorder {
        fn info(&mut self, message: &str) {
            self.infos.push(message.to_owned());
        }

        fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
            self.outputs.push((name.to_owned(), value.to_owned()));
            Ok(())
        }

        fn set_failed(&mut self, message: &str) {
            self.failures.push(message.to_owned());
        }
    }

    enum Outcome {
        Created,
        Rejected(&'static str),
    }

    /// Behaves like the service: a tag can only be released once.
    struct FakeApi {
        outcome: Outcome,
        calls: Cell<usize>,
        requests: RefCell<Vec<ReleaseConfig>>,
        tags: RefCell<HashSet<String>>,
    }

    impl FakeApi {
        fn new(outcome: Outcome) -> Self {
            FakeApi {
                outcome,
                calls: Cell::new(0),
                requests: RefCell::new(Vec::new()),
                tags: RefCell::new(HashSet::new()),
            }
        }
    }

    impl ReleaseApi for FakeApi {
        async fn create_release(
            &self,
            config: &ReleaseConfig,
        ) -> Result<ReleaseResponse, http::Error> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(config.clone());

            if let Outcome::Rejected(message) = self.outcome {
                return Err(http::Error::GenericResponseError {
                    message: message.to_owned(),
                });
            }

            if !self.tags.borrow_mut().insert(config.tag.value().to_owned()) {
                return Err(http::Error::GenericResponseError {
                    message: "Validation Failed".to_owned(),
                });
            }

            Ok(ReleaseResponse {
                id: ReleaseId::Number(42),
                html_url: "http://x/42".to_owned(),
                upload_url: "http://x/42/upload".to_owned(),
            })
        }
    }

    fn inputs(values: &[(&str, &str)]) -> EnvInputs {
        EnvInputs::new(
            values
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<Vars>(),
        )
    }

    fn context() -> Context {
        Context::new("octocat", "hello-world", SHA)
    }

    fn published(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn should_publish_the_created_release() {
        let api = FakeApi::new(Outcome::Created);
        let mut reporter = Recorder::default();

        create(
            &inputs(&[("INPUT_TAG_NAME", "refs/tags/v1.0.0")]),
            &context(),
            &api,
            &mut reporter,
        )
        .await;

        assert_eq!(
            reporter.outputs,
            published(&[
                ("id", "42"),
                ("html_url", "http://x/42"),
                ("upload_url", "http://x/42/upload"),
            ])
        );
        assert!(reporter.failures.is_empty());
        assert_eq!(reporter.infos.len(), 1);
        assert!(reporter.infos[0].starts_with("Trying to create release with options: "));
        assert!(reporter.infos[0].contains("v1.0.0"));

        let requests = api.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tag.value(), "v1.0.0");
        assert_eq!(requests[0].owner, "octocat");
        assert_eq!(requests[0].repo, "hello-world");
        assert_eq!(requests[0].target_commitish, SHA);
    }

    #[tokio::test]
    async fn should_not_call_the_api_without_a_tag() {
        let api = FakeApi::new(Outcome::Created);
        let mut reporter = Recorder::default();

        create(&inputs(&[("INPUT_DRAFT", "true")]), &context(), &api, &mut reporter).await;

        assert_eq!(api.calls.get(), 0);
        assert_eq!(
            reporter.failures,
            vec!["Input required and not supplied: tag_name".to_owned()]
        );
        assert!(reporter.outputs.is_empty());
        assert!(reporter.infos.is_empty());
    }

    #[tokio::test]
    async fn should_forward_the_rejection_message_verbatim() {
        let api = FakeApi::new(Outcome::Rejected("Validation Failed"));
        let mut reporter = Recorder::default();

        create(
            &inputs(&[("INPUT_TAG_NAME", "v1.0.0")]),
            &context(),
            &api,
            &mut reporter,
        )
        .await;

        assert_eq!(api.calls.get(), 1);
        assert_eq!(reporter.failures, vec!["Validation Failed".to_owned()]);
        assert!(reporter.outputs.is_empty());
    }

    #[tokio::test]
    async fn should_fail_the_second_run_for_the_same_tag() {
        let api = FakeApi::new(Outcome::Created);
        let inputs = inputs(&[("INPUT_TAG_NAME", "v1.0.0")]);

        let mut first = Recorder::default();
        create(&inputs, &context(), &api, &mut first).await;

        let mut second = Recorder::default();
        create(&inputs, &context(), &api, &mut second).await;

        assert_eq!(api.calls.get(), 2);
        assert_eq!(first.outputs.len(), 3);
        assert!(first.failures.is_empty());
        assert!(second.outputs.is_empty());
        assert_eq!(second.failures, vec!["Validation Failed".to_owned()]);
    }

    #[tokio::test]
    async fn should_report_output_failures() {
        struct BrokenOutputs(Recorder);

        impl Reporter for BrokenOutputs {
            fn info(&mut self, message: &str) {
                self.0.info(message);
            }

            fn set_output(&mut self, _name: &str, _value: &str) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::NotFound, "no output file"))
            }

            fn set_failed(&mut self, message: &str) {
                self.0.set_failed(message);
            }
        }

        let api = FakeApi::new(Outcome::Created);
        let mut reporter = BrokenOutputs(Recorder::default());

        create(
            &inputs(&[("INPUT_TAG_NAME", "v1.0.0")]),
            &context(),
            &api,
            &mut reporter,
        )
        .await;

        assert_eq!(
            reporter.0.failures,
            vec!["Failed to set outputs: no output file".to_owned()]
        );
    }

    #[tokio::test]
    async fn should_fail_without_credentials() {
        let settings = Settings::from_vars(&Vars::new());
        let mut reporter = Recorder::default();

        run(
            &inputs(&[("INPUT_TAG_NAME", "v1.0.0")]),
            &context(),
            &settings,
            &mut reporter,
        )
        .await;

        assert_eq!(reporter.failures.len(), 1);
        assert!(reporter.failures[0].contains("GITHUB_TOKEN"));
        assert!(reporter.outputs.is_empty());
    }

    #[tokio::test]
    async fn should_create_the_release_with_the_token_input() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/repos/hubot/releases/releases")
            .match_header("authorization", "Bearer input_token")
            .with_status(201)
            .with_body(r#"{"id":7,"html_url":"http://x/7","upload_url":"http://x/7/upload"}"#)
            .create_async()
            .await;

        let mut vars = Vars::new();
        vars.insert("GITHUB_API_URL".to_owned(), server.url());
        vars.insert("GITHUB_TOKEN".to_owned(), "env_token".to_owned());
        let settings = Settings::from_vars(&vars);
        let mut reporter = Recorder::default();

        run(
            &inputs(&[
                ("INPUT_TAG_NAME", "v1.0.0"),
                ("INPUT_OWNER_NAME", "hubot"),
                ("INPUT_REPO_NAME", "releases"),
                ("INPUT_TOKEN", "input_token"),
            ]),
            &context(),
            &settings,
            &mut reporter,
        )
        .await;

        m.assert_async().await;
        assert!(reporter.failures.is_empty(), "{:?}", reporter.failures);
        assert_eq!(
            reporter.outputs,
            published(&[
                ("id", "7"),
                ("html_url", "http://x/7"),
                ("upload_url", "http://x/7/upload"),
            ])
        );
    }
}
