/// Generates state/reset accessors for the operation clients a resource
/// client carries, named after the operation rather than the struct field.
#[macro_export]
macro_rules! impl_op_accessors {
    ($client:ty { $($field:ident as $name:ident),+ $(,)? }) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client {
                $(
                    #[tracing::instrument(skip(self))]
                    pub async fn [<$name _state>](
                        &self,
                    ) -> Result<$crate::op_framework::OpState, $crate::error::ApiError> {
                        self.$field.state().await
                    }

                    #[tracing::instrument(skip(self))]
                    pub async fn [<reset_ $name>](
                        &self,
                    ) -> Result<(), $crate::error::ApiError> {
                        self.$field.reset().await
                    }
                )+
            }
        }
    };
}
