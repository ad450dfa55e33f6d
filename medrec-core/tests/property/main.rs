mod model_properties;
