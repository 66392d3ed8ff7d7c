use std::path::PathBuf;

use tracing::{debug, error, info};

use super::error::{PipelineError, StepError};
use crate::models::{Post, Section, SectionId, Site};

/// 发布上下文，在各个步骤之间以独占所有权传递
#[derive(Debug)]
pub struct PublishingContext {
    /// 站点模型
    pub site: Site,
    /// Markdown 内容目录
    pub content_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
}

impl PublishingContext {
    pub fn new(site: Site, content_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            site,
            content_dir,
            output_dir,
        }
    }

    /// 依次修改所有分区
    pub fn mutate_all_sections<F>(&mut self, mut mutate: F)
    where
        F: FnMut(&mut Section),
    {
        for section in self.site.sections_mut() {
            mutate(section);
        }
    }

    /// 依次修改某个分区中的所有文章
    pub fn mutate_items<F>(&mut self, id: SectionId, mutate: F)
    where
        F: FnMut(&mut Post),
    {
        self.site.section_mut(id).posts.iter_mut().for_each(mutate);
    }
}

type StepBody = Box<dyn FnOnce(&mut PublishingContext) -> Result<(), StepError>>;

/// 一个具名的发布步骤
pub struct PublishingStep {
    name: String,
    body: StepBody,
}

impl PublishingStep {
    /// 创建新的发布步骤
    pub fn step<F>(name: impl Into<String>, body: F) -> Self
    where
        F: FnOnce(&mut PublishingContext) -> Result<(), StepError> + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PublishingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishingStep").field("name", &self.name).finish()
    }
}

/// 有序的发布流水线
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<PublishingStep>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个步骤，步骤按注册顺序执行
    pub fn with_step(mut self, step: PublishingStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: PublishingStep) {
        self.steps.push(step);
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(PublishingStep::name).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 运行流水线，任何步骤失败都会中止整个构建
    pub fn run(self, mut context: PublishingContext) -> Result<PublishingContext, PipelineError> {
        let total = self.steps.len();
        info!("开始发布，共 {} 个步骤", total);

        for (index, step) in self.steps.into_iter().enumerate() {
            info!("[{}/{}] {}", index + 1, total, step.name);
            let PublishingStep { name, body } = step;

            if let Err(source) = body(&mut context) {
                error!("步骤 {} 失败: {}", name, source);
                return Err(PipelineError { step: name, source });
            }
            debug!("步骤 {} 完成", name);
        }

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use url::Url;

    fn context() -> PublishingContext {
        let site = Site::new("Test", "", Url::parse("https://example.com").unwrap(), "en", Vec::new());
        PublishingContext::new(site, PathBuf::from("content"), PathBuf::from("output"))
    }

    #[test]
    fn steps_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = Pipeline::new();
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            pipeline.push(PublishingStep::step(name, move |_| {
                log.borrow_mut().push(name);
                Ok(())
            }));
        }

        assert_eq!(pipeline.step_names(), vec!["first", "second", "third"]);
        pipeline.run(context()).unwrap();
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn failing_step_aborts_and_is_named() {
        let reached = Rc::new(RefCell::new(false));
        let reached_clone = Rc::clone(&reached);

        let pipeline = Pipeline::new()
            .with_step(PublishingStep::step("Break", |_| {
                Err(StepError::UntaggedItem {
                    path: "posts/a".to_string(),
                })
            }))
            .with_step(PublishingStep::step("Never", move |_| {
                *reached_clone.borrow_mut() = true;
                Ok(())
            }));

        let err = pipeline.run(context()).unwrap_err();
        assert_eq!(err.step, "Break");
        assert!(!*reached.borrow());
    }

    #[test]
    fn context_mutations_are_threaded_through() {
        let pipeline = Pipeline::new().with_step(PublishingStep::step("Rename", |ctx| {
            ctx.mutate_all_sections(|section| section.title = "X".to_string());
            Ok(())
        }));

        let ctx = pipeline.run(context()).unwrap();
        assert!(ctx.site.sections().iter().all(|s| s.title == "X"));
    }
}
